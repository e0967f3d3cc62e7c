use std::fmt;

use super::defaults;
use super::env_source::EnvSource;
use super::errors::ConfigError;
use super::keys;
use super::resolve::{flag, number_or, string_or};

/// Typed configuration for the authentication backend.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub firebase: FirebaseConfig,
    pub app: AppInfo,
    pub jwt: JwtConfig,
    pub security: SecurityConfig,
    pub server: ServerConfig,
    pub features: FeatureFlags,
    pub logging: LoggingConfig,
}

#[derive(Clone, PartialEq)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
}

impl fmt::Debug for FirebaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirebaseConfig")
            .field("api_key", &"<redacted>")
            .field("auth_domain", &self.auth_domain)
            .field("project_id", &self.project_id)
            .field("storage_bucket", &self.storage_bucket)
            .field("messaging_sender_id", &self.messaging_sender_id)
            .field("app_id", &self.app_id)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub environment: String,
    pub debug: bool,
}

#[derive(Clone, PartialEq)]
pub struct JwtConfig {
    pub secret: String,
    /// Token lifetime in the issuer's duration notation, e.g. `"1h"`.
    pub expiry: String,
    pub algorithm: String,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiry", &self.expiry)
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SecurityConfig {
    pub bcrypt_salt_rounds: u32,
    /// Seconds.
    pub session_timeout: u64,
    pub max_login_attempts: u32,
    pub password_min_length: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub base_url: String,
    /// Milliseconds.
    pub timeout: u64,
    pub cors_origin: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureFlags {
    pub enable_registration: bool,
    pub enable_email_verification: bool,
    pub enable_password_reset: bool,
    pub enable_social_login: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
    pub file: String,
    pub max_size: String,
    pub max_files: u32,
}

impl Config {
    /// Resolve every field from `env`, applying defaults. Never fails: required
    /// variables that are missing come out as empty strings, so callers that
    /// need a valid record go through [`load`] instead.
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Self {
        Self {
            firebase: FirebaseConfig {
                api_key: string_or(env, keys::FIREBASE_API_KEY, ""),
                auth_domain: string_or(env, keys::FIREBASE_AUTH_DOMAIN, ""),
                project_id: string_or(env, keys::FIREBASE_PROJECT_ID, ""),
                storage_bucket: string_or(
                    env,
                    keys::FIREBASE_STORAGE_BUCKET,
                    defaults::FIREBASE_STORAGE_BUCKET,
                ),
                messaging_sender_id: string_or(
                    env,
                    keys::FIREBASE_MESSAGING_SENDER_ID,
                    defaults::FIREBASE_MESSAGING_SENDER_ID,
                ),
                app_id: string_or(env, keys::FIREBASE_APP_ID, defaults::FIREBASE_APP_ID),
            },
            app: AppInfo {
                name: string_or(env, keys::APP_NAME, defaults::APP_NAME),
                version: string_or(env, keys::APP_VERSION, defaults::APP_VERSION),
                description: string_or(env, keys::APP_DESCRIPTION, defaults::APP_DESCRIPTION),
                environment: string_or(env, keys::APP_ENVIRONMENT, defaults::APP_ENVIRONMENT),
                debug: flag(env, keys::APP_DEBUG),
            },
            jwt: JwtConfig {
                secret: string_or(env, keys::JWT_SECRET, ""),
                expiry: string_or(env, keys::JWT_EXPIRY, defaults::JWT_EXPIRY),
                algorithm: string_or(env, keys::JWT_ALGORITHM, defaults::JWT_ALGORITHM),
            },
            security: SecurityConfig {
                bcrypt_salt_rounds: number_or(
                    env,
                    keys::BCRYPT_SALT_ROUNDS,
                    defaults::BCRYPT_SALT_ROUNDS,
                ),
                session_timeout: number_or(env, keys::SESSION_TIMEOUT, defaults::SESSION_TIMEOUT),
                max_login_attempts: number_or(
                    env,
                    keys::MAX_LOGIN_ATTEMPTS,
                    defaults::MAX_LOGIN_ATTEMPTS,
                ),
                password_min_length: number_or(
                    env,
                    keys::PASSWORD_MIN_LENGTH,
                    defaults::PASSWORD_MIN_LENGTH,
                ),
            },
            server: ServerConfig {
                port: number_or(env, keys::API_PORT, defaults::API_PORT),
                base_url: string_or(env, keys::API_BASE_URL, defaults::API_BASE_URL),
                timeout: number_or(env, keys::API_TIMEOUT, defaults::API_TIMEOUT),
                cors_origin: string_or(env, keys::CORS_ORIGIN, defaults::CORS_ORIGIN),
            },
            features: FeatureFlags {
                enable_registration: flag(env, keys::ENABLE_REGISTRATION),
                enable_email_verification: flag(env, keys::ENABLE_EMAIL_VERIFICATION),
                enable_password_reset: flag(env, keys::ENABLE_PASSWORD_RESET),
                enable_social_login: flag(env, keys::ENABLE_SOCIAL_LOGIN),
            },
            logging: LoggingConfig {
                level: string_or(env, keys::LOG_LEVEL, defaults::LOG_LEVEL),
                file: string_or(env, keys::LOG_FILE, defaults::LOG_FILE),
                max_size: string_or(env, keys::LOG_MAX_SIZE, defaults::LOG_MAX_SIZE),
                max_files: number_or(env, keys::LOG_MAX_FILES, defaults::LOG_MAX_FILES),
            },
        }
    }
}

/// Required variables that are absent or empty in `env`, in declaration order.
///
/// Checks the raw environment, not a resolved [`Config`].
pub fn missing_required<E: EnvSource + ?Sized>(env: &E) -> Vec<&'static str> {
    keys::REQUIRED
        .into_iter()
        .filter(|key| env.non_empty(key).is_none())
        .collect()
}

/// Resolve and validate. Reports every missing required variable at once.
pub fn load<E: EnvSource + ?Sized>(env: &E) -> Result<Config, ConfigError> {
    let missing = missing_required(env);
    if !missing.is_empty() {
        return Err(ConfigError::missing_required(missing));
    }
    Ok(Config::from_env(env))
}
