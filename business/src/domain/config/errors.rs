/// Configuration errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Every required variable that was absent or empty, in declaration order.
    #[error("config.missing_required: {}", .0.join(", "))]
    MissingRequiredConfig(Vec<String>),
}

impl ConfigError {
    pub fn missing_required<I, S>(variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConfigError::MissingRequiredConfig(variables.into_iter().map(Into::into).collect())
    }

    pub fn missing_variables(&self) -> &[String] {
        match self {
            ConfigError::MissingRequiredConfig(variables) => variables,
        }
    }
}
