mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = server.client.get(server.url("/health")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn register_then_duplicate_email_conflicts() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = server.register("herschel@example.com", "uranus").await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["message"], "User created successfully.");
    assert_eq!(body["data"]["record"]["email"], "herschel@example.com");
    assert!(body["data"]["record"].get("password").is_none());

    let res = server.register("herschel@example.com", "other").await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "That email already exists.");
    assert_eq!(body["code"], "CONFLICT");
    Ok(())
}

#[tokio::test]
async fn register_accepts_form_fields() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = server
        .client
        .post(server.url("/register"))
        .form(&[
            ("first_name", "Caroline"),
            ("last_name", "Herschel"),
            ("email", "caroline@example.com"),
            ("password", "comets"),
        ])
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    // The new user is retrievable by email
    let res = server.login("caroline@example.com", "comets").await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn register_with_missing_fields_is_bad_request() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = server
        .client
        .post(server.url("/register"))
        .json(&json!({ "email": "nobody@example.com" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body = res.json::<Value>().await?;
    assert_eq!(body["code"], "VALIDATION_ERROR");
    for field in ["first_name", "last_name", "password"] {
        assert!(body["field_errors"].get(field).is_some(), "missing {} in {}", field, body);
    }
    Ok(())
}

#[tokio::test]
async fn login_with_correct_password_returns_token() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    server.register("test@test.com", "P@ssw0rd").await?;

    let res = server.login("test@test.com", "P@ssw0rd").await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["message"], "Login succeeded!");
    assert!(!body["data"]["access_token"].as_str().unwrap_or_default().is_empty());
    Ok(())
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    server.register("test@test.com", "P@ssw0rd").await?;

    let res = server.login("test@test.com", "guess").await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Bad email or password");
    Ok(())
}

#[tokio::test]
async fn login_with_unknown_email_is_unauthorized() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = server.login("ghost@example.com", "whatever").await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn login_without_body_is_bad_request() -> Result<()> {
    let server = common::TestServer::spawn().await?;

    let res = server.client.post(server.url("/login")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn retrieve_password_mails_known_users_only() -> Result<()> {
    let server = common::TestServer::spawn().await?;
    server.register("test@test.com", "P@ssw0rd").await?;

    let res = server.client.get(server.url("/retrieve_password/test@test.com")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["data"]["message"], "Password sent to test@test.com");

    let sent = server.mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "test@test.com");
    assert!(sent[0].body.contains("P@ssw0rd"));

    let res = server.client.get(server.url("/retrieve_password/ghost@example.com")).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "That email doesn't exist");
    assert_eq!(server.mailer.sent().len(), 1);
    Ok(())
}
