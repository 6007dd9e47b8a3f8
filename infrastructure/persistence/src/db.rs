use sqlx::{PgPool, migrate::Migrator, postgres::PgPoolOptions};
use std::time::Duration;
use thiserror::Error;

/// Schema for the `products` table, embedded at compile time.
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError(#[source] sqlx::Error),
    #[error("database.migration_error")]
    MigrationError(#[source] sqlx::migrate::MigrateError),
}

/// Configuration for the database connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(DatabaseError::ConnectionError)?;

    Ok(pool)
}

/// Applies the embedded migrations. Already-applied migrations are skipped.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DatabaseError> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(DatabaseError::MigrationError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_small_pool_and_thirty_second_acquire_timeout_by_default() {
        let config = DatabaseConfig::new("postgres://localhost:5432/products".to_string());

        assert_eq!(config.connection_string, "postgres://localhost:5432/products");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_embed_product_table_migration() {
        assert!(
            MIGRATOR
                .iter()
                .any(|migration| migration.description.contains("create products"))
        );
    }
}
