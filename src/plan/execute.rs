use anyhow::{Context as _, Result};

use super::Operation;
use crate::logging::{Log, OperationStatus};
use crate::resources::{Applicable, ResourceChange};

/// Run `operations` strictly in order, stopping at the first failure.
///
/// Earlier operations are not rolled back.
///
/// # Errors
///
/// Returns the failing operation's error with its description as context.
pub fn execute_operations(operations: &[Operation], log: &dyn Log) -> Result<()> {
    for op in operations {
        log.info(&op.description);
        log.debug(&op.action.description());

        match op.action.apply().context(op.description.clone())? {
            ResourceChange::Applied => {
                log.record_operation(&op.description, OperationStatus::Applied, None);
            }
            ResourceChange::Skipped { reason } => {
                log.debug(&format!("skipped: {reason}"));
                log.record_operation(&op.description, OperationStatus::Skipped, Some(&reason));
            }
        }
    }
    Ok(())
}

/// Report `operations` without running any of them.
pub fn list_operations(operations: &[Operation], log: &dyn Log) {
    for op in operations {
        log.dry_run(&op.description);
        log.debug(&op.action.description());
        log.record_operation(&op.description, OperationStatus::DryRun, None);
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::logging::RecordingLog;
    use crate::plan::Action;
    use crate::resources::copy::CopyResource;
    use crate::resources::directory::CreateDirResource;
    use crate::resources::file::WriteFileResource;

    #[test]
    fn runs_in_order_and_logs_descriptions() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("bundle/model");
        let config = dir.path().join("bundle/joshua.config");
        let ops = vec![
            Operation::new(
                Action::CreateDir(CreateDirResource::new(model.clone())),
                "Creating destination directory",
            ),
            Operation::new(
                Action::WriteFile(WriteFileResource::new(config.clone(), "a\n".to_string())),
                "Writing the updated joshua.config",
            ),
        ];
        let log = RecordingLog::default();

        execute_operations(&ops, &log).unwrap();

        assert!(model.is_dir());
        assert_eq!(std::fs::read_to_string(config).unwrap(), "a\n");
        assert_eq!(
            log.of_kind("info"),
            ["Creating destination directory", "Writing the updated joshua.config"]
        );
        assert_eq!(log.of_kind("debug").len(), 2);
        assert_eq!(
            log.statuses(),
            [OperationStatus::Applied, OperationStatus::Applied]
        );
    }

    #[test]
    fn first_failure_stops_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let later = dir.path().join("never");
        let ops = vec![
            Operation::new(
                Action::Copy(CopyResource::new(
                    dir.path().join("missing"),
                    dir.path().join("copy"),
                )),
                "Making a copy of missing",
            ),
            Operation::new(
                Action::CreateDir(CreateDirResource::new(later.clone())),
                "Creating later directory",
            ),
        ];
        let log = RecordingLog::default();

        let err = execute_operations(&ops, &log).unwrap_err();
        assert_eq!(err.to_string(), "Making a copy of missing");
        assert!(!later.exists());
        assert!(log.statuses().is_empty());
    }

    #[test]
    fn listing_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("bundle/model");
        let ops = vec![Operation::new(
            Action::CreateDir(CreateDirResource::new(model.clone())),
            "Creating destination directory",
        )];
        let log = RecordingLog::default();

        list_operations(&ops, &log);

        assert!(!model.exists());
        assert_eq!(log.of_kind("dry_run"), ["Creating destination directory"]);
        assert_eq!(log.statuses(), [OperationStatus::DryRun]);
    }
}
