use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::error::DataStoreResult;

/// Owns the connection pool for one database.
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Connect using the given configuration. Pool sizing and checkout
    /// timeout come from the config; the URL resolves through
    /// [`DatabaseConfig::database_url`].
    pub async fn new(config: &DatabaseConfig) -> DataStoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.pool)
            .acquire_timeout(Duration::from_secs(config.checkout_timeout_seconds))
            .connect(&config.database_url())
            .await?;

        info!(
            max_connections = config.pool,
            database = %config.database,
            "database pool established"
        );

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn health_check(&self) -> DataStoreResult<bool> {
        let row = sqlx::query("SELECT 1 as health")
            .fetch_one(&self.pool)
            .await?;

        let health: i32 = row.get("health");
        Ok(health == 1)
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}
