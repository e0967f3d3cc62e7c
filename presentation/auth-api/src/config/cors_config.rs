use poem::middleware::Cors;

/// Split a `CORS_ORIGIN` value into individual origins.
///
/// A single origin is the common case; a comma-separated list is accepted too.
pub fn parse_origins(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .collect()
}

/// Initialize CORS middleware for cross-origin requests
///
/// Configuration:
/// - Origins: from `server.cors_origin`
/// - Methods: GET, POST, PUT, DELETE, PATCH, OPTIONS
/// - Headers: content-type, authorization
/// - Credentials: Enabled
///
pub fn init_cors(cors_origin: &str) -> Cors {
    Cors::new()
        .allow_origins(parse_origins(cors_origin))
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization"])
        .allow_credentials(true)
}
