//! Console logger with summary collection.
use std::sync::Mutex;

use super::types::{Log, OperationEntry, OperationStatus};

/// Implement the display methods of [`Log`] by delegating to inherent methods
/// of the same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Logger that forwards every message to [`tracing`] and remembers the
/// outcome of each operation for [`print_summary`](Self::print_summary).
#[derive(Debug, Default)]
pub struct Logger {
    operations: Mutex<Vec<OperationEntry>>,
}

impl Logger {
    /// Create a new logger with an empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header.
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: super::subscriber::STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message.
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Log a dry-run action message.
    pub fn dry_run(&self, msg: &str) {
        tracing::info!(target: super::subscriber::DRY_RUN_TARGET, "{msg}");
    }

    /// Record an operation result for the summary.
    pub fn record_operation(&self, description: &str, status: OperationStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.operations.lock() {
            guard.push(OperationEntry {
                description: description.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Number of recorded operations with the given status.
    #[must_use]
    pub fn count(&self, status: OperationStatus) -> usize {
        self.operations
            .lock()
            .map_or(0, |guard| guard.iter().filter(|e| e.status == status).count())
    }

    /// Return a clone of all recorded entries.
    #[must_use]
    pub fn entries(&self) -> Vec<OperationEntry> {
        self.operations.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Log a one-line tally of the recorded operations plus any skip reasons.
    pub fn print_summary(&self) {
        let entries = self.entries();
        if entries.is_empty() {
            return;
        }

        for entry in &entries {
            if let (OperationStatus::Skipped, Some(reason)) = (entry.status, &entry.message) {
                self.warn(&format!("skipped: {} ({reason})", entry.description));
            }
        }

        self.info(&format!(
            "{} operations: {} applied, {} skipped, {} dry-run",
            entries.len(),
            self.count(OperationStatus::Applied),
            self.count(OperationStatus::Skipped),
            self.count(OperationStatus::DryRun),
        ));
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error, dry_run);

    fn record_operation(&self, description: &str, status: OperationStatus, message: Option<&str>) {
        self.record_operation(description, status, message);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn logger_starts_empty() {
        let log = Logger::new();
        assert!(log.entries().is_empty());
    }

    #[test]
    fn record_operation_keeps_order_and_message() {
        let log = Logger::new();
        log.record_operation("Creating destination directory", OperationStatus::Applied, None);
        log.record_operation(
            "Making the bundle runner file executable",
            OperationStatus::Skipped,
            Some("chmod not supported"),
        );
        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].description, "Creating destination directory");
        assert_eq!(entries[1].message.as_deref(), Some("chmod not supported"));
    }

    #[test]
    fn count_filters_by_status() {
        let log = Logger::new();
        log.record_operation("a", OperationStatus::Applied, None);
        log.record_operation("b", OperationStatus::Applied, None);
        log.record_operation("c", OperationStatus::DryRun, None);
        assert_eq!(log.count(OperationStatus::Applied), 2);
        assert_eq!(log.count(OperationStatus::DryRun), 1);
        assert_eq!(log.count(OperationStatus::Skipped), 0);
    }

    #[test]
    fn log_trait_delegates_to_logger() {
        let log = Logger::new();
        let log_ref: &dyn Log = &log;
        log_ref.info("no subscriber installed");
        log_ref.record_operation("via-trait", OperationStatus::Applied, None);
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn print_summary_without_entries_is_silent() {
        Logger::new().print_summary();
    }
}
