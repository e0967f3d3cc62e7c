/// Diagnostics sink for the domain. Startup failures go to `error`, the
/// loaded-configuration summary to `info`.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
