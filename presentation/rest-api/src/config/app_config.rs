use super::{cors_config, database_config, server_config::ServerConfig};
use persistence::db::DatabaseConfig;
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: database_config::from_env(),
        }
    }
}
