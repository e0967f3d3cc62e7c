//! Environment variable names read by the loader, grouped the same way as
//! the [`Config`](super::model::Config) record.

pub const FIREBASE_API_KEY: &str = "FIREBASE_API_KEY";
pub const FIREBASE_AUTH_DOMAIN: &str = "FIREBASE_AUTH_DOMAIN";
pub const FIREBASE_PROJECT_ID: &str = "FIREBASE_PROJECT_ID";
pub const FIREBASE_STORAGE_BUCKET: &str = "FIREBASE_STORAGE_BUCKET";
pub const FIREBASE_MESSAGING_SENDER_ID: &str = "FIREBASE_MESSAGING_SENDER_ID";
pub const FIREBASE_APP_ID: &str = "FIREBASE_APP_ID";

pub const APP_NAME: &str = "APP_NAME";
pub const APP_VERSION: &str = "APP_VERSION";
pub const APP_DESCRIPTION: &str = "APP_DESCRIPTION";
pub const APP_ENVIRONMENT: &str = "NODE_ENV";
pub const APP_DEBUG: &str = "DEBUG";

pub const JWT_SECRET: &str = "JWT_SECRET";
pub const JWT_EXPIRY: &str = "JWT_EXPIRY";
pub const JWT_ALGORITHM: &str = "JWT_ALGORITHM";

pub const BCRYPT_SALT_ROUNDS: &str = "BCRYPT_SALT_ROUNDS";
pub const SESSION_TIMEOUT: &str = "SESSION_TIMEOUT";
pub const MAX_LOGIN_ATTEMPTS: &str = "MAX_LOGIN_ATTEMPTS";
pub const PASSWORD_MIN_LENGTH: &str = "PASSWORD_MIN_LENGTH";

pub const API_PORT: &str = "API_PORT";
pub const API_BASE_URL: &str = "API_BASE_URL";
pub const API_TIMEOUT: &str = "API_TIMEOUT";
pub const CORS_ORIGIN: &str = "CORS_ORIGIN";

pub const ENABLE_REGISTRATION: &str = "ENABLE_REGISTRATION";
pub const ENABLE_EMAIL_VERIFICATION: &str = "ENABLE_EMAIL_VERIFICATION";
pub const ENABLE_PASSWORD_RESET: &str = "ENABLE_PASSWORD_RESET";
pub const ENABLE_SOCIAL_LOGIN: &str = "ENABLE_SOCIAL_LOGIN";

pub const LOG_LEVEL: &str = "LOG_LEVEL";
pub const LOG_FILE: &str = "LOG_FILE";
pub const LOG_MAX_SIZE: &str = "LOG_MAX_SIZE";
pub const LOG_MAX_FILES: &str = "LOG_MAX_FILES";

/// Variables whose absence (or empty value) aborts startup, in reporting order.
pub const REQUIRED: [&str; 4] = [
    FIREBASE_API_KEY,
    FIREBASE_AUTH_DOMAIN,
    FIREBASE_PROJECT_ID,
    JWT_SECRET,
];
