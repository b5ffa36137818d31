use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// [`Logger`] backed by `tracing`, under the `menu` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "menu", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "menu", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "menu", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "menu", "{}", message);
    }
    fn rejected(&self, action: &str, code: &dyn std::fmt::Display) {
        warn!(target: "menu", action, code = %code, "Rejected {}", action);
    }
}
