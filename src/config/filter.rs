//! External configuration filter (`copy-config.pl`).
//!
//! The filter can add, replace, or drop decoder options before the config is
//! scanned for paths. It is injected through [`ConfigFilter`] so the planner
//! can be tested without spawning anything.

use std::path::PathBuf;

use crate::error::FilterError;
use crate::exec;

/// Rewrites configuration text according to an option string.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigFilter {
    /// Return `text` transformed by `options`.
    ///
    /// # Errors
    ///
    /// Returns a [`FilterError`] if the transformation fails.
    fn transform(&self, text: &str, options: &str) -> Result<String, FilterError>;
}

/// Runs `$JOSHUA/scripts/copy-config.pl <options>` as a blocking subprocess.
#[derive(Debug, Clone)]
pub struct CopyConfigScript {
    /// Path to the script.
    pub script: PathBuf,
    /// Directory exported to the child as `TMPDIR`.
    pub tmpdir: PathBuf,
}

impl CopyConfigScript {
    /// Script location relative to the install root.
    pub const RELATIVE_PATH: &'static str = "scripts/copy-config.pl";

    /// Create a filter using the script under `joshua_root`.
    #[must_use]
    pub fn new(joshua_root: &std::path::Path, tmpdir: PathBuf) -> Self {
        Self {
            script: joshua_root.join(Self::RELATIVE_PATH),
            tmpdir,
        }
    }

    /// Shell command line for `options`.
    #[must_use]
    pub fn command(&self, options: &str) -> String {
        format!("{} {options}", self.script.display())
    }
}

impl ConfigFilter for CopyConfigScript {
    fn transform(&self, text: &str, options: &str) -> Result<String, FilterError> {
        let command = self.command(options);
        tracing::info!("Running the copy-config.pl script with the command: {command}");

        let result = exec::run_shell_with_input(&command, text, &[("TMPDIR", &self.tmpdir)])
            .map_err(|source| FilterError::Io {
                command: command.clone(),
                source,
            })?;

        if !result.success {
            return Err(FilterError::Failed {
                command,
                code: result.code.unwrap_or(-1),
                stderr: result.stderr.trim().to_string(),
            });
        }
        Ok(result.stdout)
    }
}
