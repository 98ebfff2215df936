//! PostgreSQL storage adapter implementation

pub mod config;
pub mod migrations;
pub mod records;

pub use config::{ConfigError, MigrationConfig, PoolConfig, PostgresConfig};
pub use migrations::{MigrationError, MigrationManager};

use addrbook_core::error::{AddrbookError, Result};
use sqlx::{postgres::PgPoolOptions, PgPool};

/// PostgreSQL storage adapter
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connect using the given configuration
    pub async fn new(config: PostgresConfig) -> Result<Self> {
        config.validate().map_err(|e| AddrbookError::ConfigInvalid {
            key: "database_url".to_string(),
            reason: e.to_string(),
        })?;

        let pool = PgPoolOptions::new()
            .min_connections(config.pool.min_connections)
            .max_connections(config.pool.max_connections)
            .acquire_timeout(config.pool.acquire_timeout)
            .idle_timeout(config.pool.idle_timeout)
            .max_lifetime(config.pool.max_lifetime)
            .connect(&config.database_url)
            .await
            .map_err(|e| AddrbookError::Storage(format!("Failed to connect to database: {}", e)))?;

        let store = Self { pool };
        store.health_check().await?;

        tracing::info!(
            max_connections = config.pool.max_connections,
            "Connected to PostgreSQL"
        );

        Ok(store)
    }

    /// Connect and apply pending migrations when configured to
    pub async fn connect(config: PostgresConfig) -> Result<Self> {
        let auto_run = config.migrations.auto_run;
        let store = Self::new(config).await?;
        if auto_run {
            store.run_migrations().await?;
        }
        Ok(store)
    }

    /// Run all pending migrations
    pub async fn run_migrations(&self) -> Result<()> {
        MigrationManager::new(self.pool.clone())
            .run_migrations()
            .await
            .map_err(|e| AddrbookError::Storage(format!("Migration failed: {}", e)))
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Perform a health check on the database connection
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AddrbookError::Storage(format!("Health check failed: {}", e)))?;
        Ok(())
    }
}
