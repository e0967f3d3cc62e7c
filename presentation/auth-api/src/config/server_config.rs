use std::time::Duration;

use business::domain::config::model::ServerConfig as Settings;

/// Address the HTTP listener binds to. The port is configurable, the
/// interface is not.
const BIND_IP: &str = "0.0.0.0";

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
    pub base_url: String,
    /// Grace period for in-flight requests on shutdown.
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            ip: BIND_IP.to_string(),
            port: settings.port,
            base_url: settings.base_url.clone(),
            shutdown_timeout: Duration::from_millis(settings.timeout),
        }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        // Arrange
        let config = ServerConfig {
            ip: "127.0.0.1".to_string(),
            port: 8080,
            base_url: "http://localhost:8080".to_string(),
            shutdown_timeout: Duration::from_secs(1),
        };

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "127.0.0.1:8080");
    }

    #[test]
    fn should_map_port_and_timeout_from_settings() {
        let settings = Settings {
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            timeout: 10_000,
            cors_origin: "http://localhost:3000".to_string(),
        };

        let config = ServerConfig::from_settings(&settings);

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.shutdown_timeout, Duration::from_secs(10));
    }
}
