//! Logging infrastructure for console output and the run summary.

mod logger;
mod subscriber;
mod types;

pub use logger::Logger;
pub use subscriber::init_subscriber;
pub use types::{Log, OperationEntry, OperationStatus};

/// In-memory [`Log`] used by unit tests to assert on emitted messages.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingLog {
    pub messages: std::sync::Mutex<Vec<(&'static str, String)>>,
    pub operations: std::sync::Mutex<Vec<(String, OperationStatus)>>,
}

#[cfg(test)]
impl RecordingLog {
    fn push(&self, kind: &'static str, msg: &str) {
        self.messages
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((kind, msg.to_string()));
    }

    /// Messages logged with the given kind (`"info"`, `"debug"`, ...).
    pub fn of_kind(&self, kind: &str) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// Recorded operation statuses in order.
    pub fn statuses(&self) -> Vec<OperationStatus> {
        self.operations
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .iter()
            .map(|(_, s)| *s)
            .collect()
    }
}

#[cfg(test)]
impl Log for RecordingLog {
    fn stage(&self, msg: &str) {
        self.push("stage", msg);
    }
    fn info(&self, msg: &str) {
        self.push("info", msg);
    }
    fn debug(&self, msg: &str) {
        self.push("debug", msg);
    }
    fn warn(&self, msg: &str) {
        self.push("warn", msg);
    }
    fn error(&self, msg: &str) {
        self.push("error", msg);
    }
    fn dry_run(&self, msg: &str) {
        self.push("dry_run", msg);
    }
    fn record_operation(&self, description: &str, status: OperationStatus, _message: Option<&str>) {
        self.operations
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((description.to_string(), status));
    }
}
