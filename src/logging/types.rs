//! Core logging types: operation entries, status, and the [`Log`] trait.

/// Outcome of one bundle operation, kept for the run summary.
#[derive(Debug, Clone)]
pub struct OperationEntry {
    /// Operation description as shown to the user.
    pub description: String,
    /// Final status of the operation.
    pub status: OperationStatus,
    /// Optional detail (e.g. why the operation was skipped).
    pub message: Option<String>,
}

/// Status of a finished operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    /// The filesystem change was made.
    Applied,
    /// The change is unsupported on this platform and was left out.
    Skipped,
    /// Only listed; nothing was touched.
    DryRun,
}

/// Abstraction over logging backends.
///
/// [`Logger`](super::logger::Logger) forwards to `tracing`; tests substitute
/// a recorder so planning and execution can be checked without a global
/// subscriber.
pub trait Log: Send + Sync {
    /// Log a stage header (major section).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (suppressed on console unless verbose).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Log a dry-run action message.
    fn dry_run(&self, msg: &str);
    /// Record an operation result for the summary.
    fn record_operation(&self, description: &str, status: OperationStatus, message: Option<&str>);
}
