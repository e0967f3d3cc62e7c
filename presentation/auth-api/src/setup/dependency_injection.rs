use std::sync::Arc;

use business::application::config::load::LoadConfigUseCaseImpl;
use environment::ProcessEnv;
use logger::TracingLogger;

use crate::config::settings;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
}

impl DependencyContainer {
    /// Loader wired to the real process environment and `tracing`.
    pub fn config_loader() -> LoadConfigUseCaseImpl {
        LoadConfigUseCaseImpl {
            env: Arc::new(ProcessEnv),
            logger: Arc::new(TracingLogger),
        }
    }

    /// Build the HTTP handlers. Requires [`settings::init`] to have succeeded.
    pub fn new() -> anyhow::Result<Self> {
        let config = settings::get()
            .ok_or_else(|| anyhow::anyhow!("config.not_initialized"))?;

        let health_api = crate::api::health::routes::Api::new(config);

        Ok(Self { health_api })
    }
}
