use business::domain::config::errors::ConfigError;
use business::domain::config::model::Config;
use business::domain::config::use_cases::load::LoadConfigUseCase;
use once_cell::sync::OnceCell;

static SETTINGS: OnceCell<Config> = OnceCell::new();

/// Run the loader and publish its result as the process-wide configuration.
///
/// Only the first successful call stores a value; later calls return the
/// already published record untouched.
pub fn init(loader: &dyn LoadConfigUseCase) -> Result<&'static Config, ConfigError> {
    if let Some(config) = SETTINGS.get() {
        return Ok(config);
    }
    let config = loader.execute()?;
    Ok(SETTINGS.get_or_init(|| config))
}

/// Process-wide configuration, once [`init`] has succeeded.
pub fn get() -> Option<&'static Config> {
    SETTINGS.get()
}
