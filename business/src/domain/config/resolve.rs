use std::str::FromStr;

use super::env_source::EnvSource;

/// Raw value when present and non-empty, otherwise `default`.
pub fn string_or<E: EnvSource + ?Sized>(env: &E, key: &str, default: &str) -> String {
    env.non_empty(key).unwrap_or_else(|| default.to_string())
}

/// `true` only for the exact literal `"true"`; anything else, including
/// `"TRUE"` or `"1"`, is `false`.
pub fn flag<E: EnvSource + ?Sized>(env: &E, key: &str) -> bool {
    env.get(key).as_deref() == Some("true")
}

/// Parsed numeric value, or `default` when the raw value is absent, does not
/// parse as `T`, or parses to zero. Zero counts as unset.
///
/// Only plain decimal integers are accepted (surrounding whitespace and a
/// leading `+` are fine); exponents, hex and fractional forms such as `1e3`,
/// `0x10` or `10000.0` fall back to `default`.
pub fn number_or<E, T>(env: &E, key: &str, default: T) -> T
where
    E: EnvSource + ?Sized,
    T: FromStr + Default + PartialEq,
{
    env.get(key)
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .filter(|value| *value != T::default())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn env_with(key: &str, value: &str) -> HashMap<String, String> {
        HashMap::from([(key.to_string(), value.to_string())])
    }

    #[test]
    fn should_fall_back_to_default_when_string_is_empty() {
        let env = env_with("APP_NAME", "");

        assert_eq!(string_or(&env, "APP_NAME", "JWT Auth System"), "JWT Auth System");
    }

    #[test]
    fn should_keep_raw_string_when_present() {
        let env = env_with("APP_NAME", "  Spaced  ");

        assert_eq!(string_or(&env, "APP_NAME", "fallback"), "  Spaced  ");
    }

    #[test]
    fn should_resolve_flag_only_for_exact_true_literal() {
        assert!(flag(&env_with("DEBUG", "true"), "DEBUG"));
        assert!(!flag(&env_with("DEBUG", "false"), "DEBUG"));
        assert!(!flag(&env_with("DEBUG", ""), "DEBUG"));
        assert!(!flag(&env_with("DEBUG", "TRUE"), "DEBUG"));
        assert!(!flag(&env_with("DEBUG", "1"), "DEBUG"));
        assert!(!flag(&HashMap::<String, String>::new(), "DEBUG"));
    }

    #[test]
    fn should_parse_number_when_valid() {
        assert_eq!(number_or(&env_with("API_PORT", "8080"), "API_PORT", 3000u16), 8080);
        assert_eq!(number_or(&env_with("API_PORT", " 8081 "), "API_PORT", 3000u16), 8081);
    }

    #[test]
    fn should_fall_back_to_default_when_number_is_invalid() {
        assert_eq!(number_or(&env_with("API_PORT", "abc"), "API_PORT", 3000u16), 3000);
        assert_eq!(number_or(&env_with("API_PORT", ""), "API_PORT", 3000u16), 3000);
        assert_eq!(number_or(&env_with("API_PORT", "-1"), "API_PORT", 3000u16), 3000);
        assert_eq!(number_or(&env_with("API_PORT", "70000"), "API_PORT", 3000u16), 3000);
        assert_eq!(number_or(&env_with("API_PORT", "80.5"), "API_PORT", 3000u16), 3000);
        assert_eq!(number_or(&HashMap::<String, String>::new(), "API_PORT", 3000u16), 3000);
    }

    #[test]
    fn should_fall_back_to_default_when_number_is_not_plain_decimal() {
        for raw in ["1e3", "0x10", "10000.0"] {
            let env = env_with("API_TIMEOUT", raw);

            assert_eq!(number_or(&env, "API_TIMEOUT", 10_000u64), 10_000, "raw: {raw}");
        }
        assert_eq!(number_or(&env_with("API_TIMEOUT", "+2500"), "API_TIMEOUT", 10_000u64), 2500);
    }

    #[test]
    fn should_fall_back_to_default_when_number_is_zero() {
        assert_eq!(number_or(&env_with("LOG_MAX_FILES", "0"), "LOG_MAX_FILES", 5u32), 5);
    }

    proptest! {
        #[test]
        fn flag_is_false_for_any_value_other_than_true(raw in "\\PC*") {
            prop_assume!(raw != "true");
            prop_assert!(!flag(&env_with("ENABLE_REGISTRATION", &raw), "ENABLE_REGISTRATION"));
        }

        #[test]
        fn number_round_trips_any_non_zero_value(value in 1u32..) {
            let env = env_with("BCRYPT_SALT_ROUNDS", &value.to_string());
            prop_assert_eq!(number_or(&env, "BCRYPT_SALT_ROUNDS", 12u32), value);
        }

        #[test]
        fn number_never_fails_on_non_numeric_input(raw in "[^0-9]*") {
            let env = env_with("SESSION_TIMEOUT", &raw);
            prop_assert_eq!(number_or(&env, "SESSION_TIMEOUT", 3600u64), 3600);
        }
    }
}
