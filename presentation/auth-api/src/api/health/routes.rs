use business::domain::config::model::{Config, FeatureFlags};
use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;

/// Feature toggles currently enabled for this deployment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlagsResponse {
    pub enable_registration: bool,
    pub enable_email_verification: bool,
    pub enable_password_reset: bool,
    pub enable_social_login: bool,
}

impl From<&FeatureFlags> for FeatureFlagsResponse {
    fn from(flags: &FeatureFlags) -> Self {
        Self {
            enable_registration: flags.enable_registration,
            enable_email_verification: flags.enable_email_verification,
            enable_password_reset: flags.enable_password_reset,
            enable_social_login: flags.enable_social_login,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Application name
    pub name: String,
    /// Application version
    pub version: String,
    /// Deployment environment, e.g. "development" or "production"
    pub environment: String,
    /// Enabled features
    pub features: FeatureFlagsResponse,
}

impl HealthCheckResponse {
    fn healthy(config: &Config, timestamp: String) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp,
            name: config.app.name.clone(),
            version: config.app.version.clone(),
            environment: config.app.environment.clone(),
            features: FeatureFlagsResponse::from(&config.features),
        }
    }
}

/// Health API for monitoring and infrastructure checks
///
/// Reports liveness together with the non-secret parts of the loaded
/// configuration.
pub struct Api {
    config: &'static Config,
}

impl Api {
    pub fn new(config: &'static Config) -> Self {
        Self { config }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service.
    /// This endpoint is public and does not require authentication.
    ///
    /// ## Response
    /// - `status`: "healthy" if service is running
    /// - `timestamp`: Current server timestamp in ISO 8601 format
    /// - `name`, `version`, `environment`: from the application settings
    /// - `features`: feature flags resolved at startup
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse::healthy(
            self.config,
            Utc::now().to_rfc3339(),
        ))
    }
}
