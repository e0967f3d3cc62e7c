use crate::domain::config::errors::ConfigError;
use crate::domain::config::model::Config;

pub trait LoadConfigUseCase: Send + Sync {
    fn execute(&self) -> Result<Config, ConfigError>;
}
