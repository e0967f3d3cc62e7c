use std::collections::HashMap;

/// Read-only view over a set of environment variables.
///
/// The domain never touches `std::env` directly; the process environment is
/// plugged in by an infrastructure adapter.
pub trait EnvSource: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Value for `key`, treating an empty string the same as an absent one.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.is_empty())
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}
