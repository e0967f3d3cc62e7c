//! Fallback values used when an optional variable is absent or empty.

pub const FIREBASE_STORAGE_BUCKET: &str = "";
pub const FIREBASE_MESSAGING_SENDER_ID: &str = "";
pub const FIREBASE_APP_ID: &str = "";

pub const APP_NAME: &str = "JWT Auth System";
pub const APP_VERSION: &str = "1.0.0";
pub const APP_DESCRIPTION: &str = "";
pub const APP_ENVIRONMENT: &str = "development";

pub const JWT_EXPIRY: &str = "1h";
pub const JWT_ALGORITHM: &str = "HS256";

pub const BCRYPT_SALT_ROUNDS: u32 = 12;
/// Seconds.
pub const SESSION_TIMEOUT: u64 = 3600;
pub const MAX_LOGIN_ATTEMPTS: u32 = 5;
pub const PASSWORD_MIN_LENGTH: usize = 6;

pub const API_PORT: u16 = 3000;
pub const API_BASE_URL: &str = "http://localhost:3000";
/// Milliseconds.
pub const API_TIMEOUT: u64 = 10_000;
pub const CORS_ORIGIN: &str = "http://localhost:3000";

pub const LOG_LEVEL: &str = "debug";
pub const LOG_FILE: &str = "logs/app.log";
pub const LOG_MAX_SIZE: &str = "10MB";
pub const LOG_MAX_FILES: u32 = 5;
