use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain diagnostics to `tracing` under a single target so config
/// messages can be filtered with `RUST_LOG=auth_config=...`.
pub struct TracingLogger;

const TARGET: &str = "auth_config";

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
