use business::domain::config::model::Config;
use poem::middleware::Cors;

use super::{cors_config, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_settings(config: &Config) -> Self {
        Self {
            server: ServerConfig::from_settings(&config.server),
            cors: cors_config::init_cors(&config.server.cors_origin),
        }
    }
}
