#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};

use planetary_api::config::AppConfig;
use planetary_api::database::{manager, schema};
use planetary_api::mail::{MailError, Mailer, Message};
use planetary_api::AppContext;

/// Keeps every message instead of sending it
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<Message>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<Message> {
        self.sent.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: Message) -> Result<(), MailError> {
        self.sent
            .lock()
            .map_err(|e| MailError::Delivery(e.to_string()))?
            .push(message);
        Ok(())
    }
}

/// A server over its own in-memory database, one per test
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    pub mailer: Arc<RecordingMailer>,
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        let pool = manager::connect_in_memory().await?;
        schema::create(&pool).await?;

        let mailer = Arc::new(RecordingMailer::default());
        let ctx = AppContext::with_mailer(AppConfig::development(), pool, mailer.clone());

        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test server")?;

        tokio::spawn(async move {
            let _ = axum::serve(listener, planetary_api::app(ctx)).await;
        });

        Ok(Self {
            base_url: format!("http://127.0.0.1:{}", port),
            client: reqwest::Client::new(),
            mailer,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<reqwest::Response> {
        let payload = json!({
            "first_name": "William",
            "last_name": "Herschel",
            "email": email,
            "password": password,
        });
        Ok(self.client.post(self.url("/register")).json(&payload).send().await?)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<reqwest::Response> {
        let payload = json!({ "email": email, "password": password });
        Ok(self.client.post(self.url("/login")).json(&payload).send().await?)
    }

    /// Register a fresh user and return a bearer token for it
    pub async fn token(&self) -> Result<String> {
        let res = self.register("test@test.com", "P@ssw0rd").await?;
        anyhow::ensure!(res.status() == StatusCode::CREATED, "register failed: {}", res.status());

        let res = self.login("test@test.com", "P@ssw0rd").await?;
        anyhow::ensure!(res.status() == StatusCode::OK, "login failed: {}", res.status());

        let body = res.json::<Value>().await?;
        body["data"]["access_token"]
            .as_str()
            .map(str::to_string)
            .context("login response has no access_token")
    }
}

pub fn mercury() -> Value {
    json!({
        "planet_name": "Mercury",
        "planet_type": "Class D",
        "home_star": "Sol",
        "mass": 2.258e23,
        "radius": 1516.0,
        "distance": 35.98e6,
    })
}
