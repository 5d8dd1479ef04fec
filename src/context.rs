use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::database::{PlanetRepository, UserRepository};
use crate::mail::{LogMailer, Mailer};

/// Everything a handler needs, built once at startup and handed to the
/// router as state.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub pool: SqlitePool,
    pub mailer: Arc<dyn Mailer>,
}

impl AppContext {
    pub fn new(config: AppConfig, pool: SqlitePool) -> Self {
        Self::with_mailer(config, pool, Arc::new(LogMailer))
    }

    pub fn with_mailer(config: AppConfig, pool: SqlitePool, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            config: Arc::new(config),
            pool,
            mailer,
        }
    }

    pub fn planets(&self) -> PlanetRepository {
        PlanetRepository::new(self.pool.clone())
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }
}
