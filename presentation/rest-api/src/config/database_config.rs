use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/products";

/// Read the store connection settings from environment variables
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (default: "postgres://localhost:5432/products")
pub fn from_env() -> DatabaseConfig {
    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    DatabaseConfig::new(db_url)
}

/// Open the connection pool and bring the schema up to date
///
/// # Errors
/// Returns error if the connection or the migration fails
pub async fn init_database(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(config).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
