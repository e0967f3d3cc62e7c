use std::sync::Arc;

use crate::domain::config::env_source::EnvSource;
use crate::domain::config::errors::ConfigError;
use crate::domain::config::model::{Config, load};
use crate::domain::config::use_cases::load::LoadConfigUseCase;
use crate::domain::logger::Logger;

pub struct LoadConfigUseCaseImpl {
    pub env: Arc<dyn EnvSource>,
    pub logger: Arc<dyn Logger>,
}

impl LoadConfigUseCase for LoadConfigUseCaseImpl {
    fn execute(&self) -> Result<Config, ConfigError> {
        self.logger.debug("Loading environment configuration");

        let config = load(self.env.as_ref()).inspect_err(|error| {
            for variable in error.missing_variables() {
                self.logger
                    .error(&format!("Missing required environment variable: {variable}"));
            }
        })?;

        self.logger
            .info("Environment configuration loaded successfully");
        self.logger.info(&format!("App: {}", config.app.name));
        self.logger
            .info(&format!("Environment: {}", config.app.environment));
        self.logger
            .info(&format!("Debug Mode: {}", config.app.debug));
        Ok(config)
    }
}
