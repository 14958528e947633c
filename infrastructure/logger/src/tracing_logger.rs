use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business-layer log lines to the `tracing` subscriber under a
/// single `meal_planner` target so they can be filtered with `RUST_LOG`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "meal_planner", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "meal_planner", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "meal_planner", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "meal_planner", "{}", message);
    }
}
