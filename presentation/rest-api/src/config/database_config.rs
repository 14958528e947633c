use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

use super::env;

const DEFAULT_MIGRATIONS_PATH: &str = "infrastructure/persistence/migrations";

/// Database settings loaded from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - MIGRATIONS_PATH: directory of SQL migrations
///   (default: "infrastructure/persistence/migrations")
pub struct DatabaseSettings {
    pub url: String,
    pub migrations_path: String,
}

impl DatabaseSettings {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            url: env::required("DATABASE_URL")?,
            migrations_path: env::optional_or("MIGRATIONS_PATH", DEFAULT_MIGRATIONS_PATH),
        })
    }
}

/// Connects to PostgreSQL and brings the schema up to date.
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&DatabaseConfig::new(settings.url.clone())).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    tracing::info!("Database ready, migrations applied from {}", settings.migrations_path);
    Ok(pool)
}
