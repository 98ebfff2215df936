use sqlx::migrate::Migrator;
use sqlx::PgPool;
use thiserror::Error;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Migration failed: {0}")]
    Failed(#[from] sqlx::migrate::MigrateError),
}

/// Applies the embedded schema migrations
pub struct MigrationManager {
    pool: PgPool,
}

impl MigrationManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply every migration not yet recorded in `_sqlx_migrations`
    pub async fn run_migrations(&self) -> Result<(), MigrationError> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }
}
