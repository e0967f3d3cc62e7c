use business::domain::config::env_source::EnvSource;

/// [`EnvSource`] backed by the real process environment.
///
/// Values that are not valid UTF-8 are reported as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::config::errors::ConfigError;
    use business::domain::config::model::load;

    const REQUIRED_SET: [(&str, Option<&str>); 4] = [
        ("FIREBASE_API_KEY", Some("k")),
        ("FIREBASE_AUTH_DOMAIN", Some("d")),
        ("FIREBASE_PROJECT_ID", Some("p")),
        ("JWT_SECRET", Some("s")),
    ];

    #[test]
    fn should_read_variable_from_process_environment() {
        temp_env::with_var("AUTH_CONFIG_SAMPLE", Some("present"), || {
            assert_eq!(ProcessEnv.get("AUTH_CONFIG_SAMPLE").as_deref(), Some("present"));
        });
    }

    #[test]
    fn should_return_none_when_variable_is_unset() {
        temp_env::with_var_unset("AUTH_CONFIG_SAMPLE", || {
            assert_eq!(ProcessEnv.get("AUTH_CONFIG_SAMPLE"), None);
        });
    }

    #[test]
    fn should_load_config_from_process_environment() {
        let mut vars = REQUIRED_SET.to_vec();
        vars.push(("API_PORT", Some("8080")));
        vars.push(("JWT_EXPIRY", None));

        temp_env::with_vars(vars, || {
            let config = load(&ProcessEnv).unwrap();

            assert_eq!(config.server.port, 8080);
            assert_eq!(config.jwt.expiry, "1h");
        });
    }

    #[test]
    fn should_fail_when_jwt_secret_is_absent_from_process_environment() {
        let mut vars = REQUIRED_SET.to_vec();
        vars[3] = ("JWT_SECRET", None);

        temp_env::with_vars(vars, || {
            let error = load(&ProcessEnv).unwrap_err();

            assert_eq!(error, ConfigError::missing_required(["JWT_SECRET"]));
        });
    }

    #[cfg(unix)]
    #[test]
    fn should_treat_non_utf8_value_as_missing() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        // Arrange
        let vars: Vec<(&str, Option<OsString>)> = vec![
            ("FIREBASE_API_KEY", Some(OsString::from_vec(vec![0xff]))),
            ("FIREBASE_AUTH_DOMAIN", Some(OsString::from("d"))),
            ("FIREBASE_PROJECT_ID", Some(OsString::from("p"))),
            ("JWT_SECRET", Some(OsString::from("s"))),
        ];

        temp_env::with_vars(vars, || {
            // Act
            let value = ProcessEnv.get("FIREBASE_API_KEY");
            let error = load(&ProcessEnv).unwrap_err();

            // Assert
            assert_eq!(value, None);
            assert_eq!(error.missing_variables(), ["FIREBASE_API_KEY"]);
        });
    }
}
