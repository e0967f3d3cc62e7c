use environment::DotenvOutcome;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, settings};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Auth API Entry Point
///
/// Loads and validates configuration before anything else starts, then
/// serves the HTTP surface configured from it.
///
/// - config/: process-wide settings and the listener/CORS views derived from them
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load `.env` so RUST_LOG and the settings below can come from it
    let dotenv = environment::load_dotenv();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match dotenv {
        DotenvOutcome::Loaded(path) => tracing::debug!("Loaded {}", path.display()),
        DotenvOutcome::NotFound => tracing::debug!("No .env file found"),
        DotenvOutcome::Invalid(error) => tracing::warn!("Ignoring malformed .env file: {error}"),
    }

    // 3. Load configuration, failing fast on missing required variables
    let config = match settings::init(&DependencyContainer::config_loader()) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("Startup aborted: {error}");
            std::process::exit(1);
        }
    };

    // 4. Wire dependencies
    let container = DependencyContainer::new()?;

    // 5. Run server
    Server::run(AppConfig::from_settings(config), container).await?;

    Ok(())
}
