//! Domain-specific error types for the bundler.
//!
//! Planning code returns typed errors built with [`thiserror`]; the command
//! layer and `main` convert them to [`anyhow::Error`] via `?`.
//!
//! # Error hierarchy
//!
//! ```text
//! BundleError
//! ├── MissingEnvironment     — JOSHUA is not set
//! ├── DestinationExists      — output directory present without --force
//! ├── ReadConfig             — source joshua.config unreadable
//! ├── Filter(FilterError)    — copy-config.pl failed
//! └── Line { LineError }     — a config line names a bad or missing path
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for a bundling run.
#[derive(Error, Debug)]
pub enum BundleError {
    /// The base install location environment variable is not defined.
    #[error("The {0} environment variable must be defined.")]
    MissingEnvironment(&'static str),

    /// The destination directory already exists and `--force` was not given.
    #[error(
        "The destination directory exists: \"{}\"\nUse -f or --force option to overwrite the directory.",
        .0.display()
    )]
    DestinationExists(PathBuf),

    /// The source configuration file could not be read.
    #[error("reading configuration file {}", path.display())]
    ReadConfig {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The external configuration filter failed.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// A configuration line could not be turned into a bundle operation.
    #[error("Configuration file \"{file}\" line {line}")]
    Line {
        /// Name of the configuration file, as given on the command line.
        file: String,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        source: LineError,
    },
}

/// Errors raised while processing a single path-bearing configuration line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LineError {
    /// The referenced file or directory does not exist.
    #[error("The path \"{}\" does not exist. Cannot proceed.", .0.display())]
    PathNotFound(PathBuf),

    /// The line was classified as path-bearing but has no path token.
    #[error("no path token after '{option}' in: {line}")]
    MissingPathToken {
        /// The option (or `<positional>`) whose value was missing.
        option: String,
        /// The offending config portion.
        line: String,
    },

    /// A path could not be made absolute for a symlink target.
    #[error("cannot resolve \"{}\" against the current directory: {reason}", path.display())]
    AbsolutePath {
        /// The path as found in the configuration.
        path: PathBuf,
        /// Why resolution failed.
        reason: String,
    },
}

/// Errors from the external configuration filter program.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The filter could not be spawned or its pipes failed.
    #[error("failed to run the copy-config filter: {command}")]
    Io {
        /// Shell command that was run.
        command: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The filter ran but exited non-zero.
    #[error(
        "Encountered an error running the copy-config.pl script.\n  command: {command}\n  exit: {code}\n  error: {stderr}"
    )]
    Failed {
        /// Shell command that was run.
        command: String,
        /// Exit code, or -1 when terminated by a signal.
        code: i32,
        /// Captured standard error output.
        stderr: String,
    },
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn missing_environment_display() {
        let e = BundleError::MissingEnvironment("JOSHUA");
        assert_eq!(
            e.to_string(),
            "The JOSHUA environment variable must be defined."
        );
    }

    #[test]
    fn destination_exists_mentions_force() {
        let e = BundleError::DestinationExists(PathBuf::from("/out/bundle"));
        let msg = e.to_string();
        assert!(msg.contains("/out/bundle"));
        assert!(msg.contains("--force"));
    }

    #[test]
    fn line_error_carries_file_and_line_number() {
        let e = BundleError::Line {
            file: "joshua.config".to_string(),
            line: 7,
            source: LineError::PathNotFound(PathBuf::from("/data/lm.kenlm")),
        };
        assert_eq!(e.to_string(), "Configuration file \"joshua.config\" line 7");
        let source = e.source().expect("line error has a source");
        assert!(source.to_string().contains("/data/lm.kenlm"));
    }

    #[test]
    fn line_error_chain_via_anyhow() {
        let e: anyhow::Error = BundleError::Line {
            file: "joshua.config".to_string(),
            line: 3,
            source: LineError::PathNotFound(PathBuf::from("missing.packed")),
        }
        .into();
        let full = format!("{e:#}");
        assert!(full.contains("line 3"));
        assert!(full.contains("\"missing.packed\" does not exist"));
    }

    #[test]
    fn missing_path_token_display() {
        let e = LineError::MissingPathToken {
            option: "-path".to_string(),
            line: "tm = moses -path".to_string(),
        };
        assert_eq!(e.to_string(), "no path token after '-path' in: tm = moses -path");
    }

    #[test]
    fn absolute_path_display() {
        let err = LineError::AbsolutePath {
            path: PathBuf::from("lm.kenlm"),
            reason: "current directory is unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot resolve \"lm.kenlm\" against the current directory: current directory is unavailable"
        );
    }

    #[test]
    fn filter_failed_display() {
        let e = FilterError::Failed {
            command: "copy-config.pl -top-n 0".to_string(),
            code: 1,
            stderr: "bad option".to_string(),
        };
        let msg = e.to_string();
        assert!(msg.contains("copy-config.pl -top-n 0"));
        assert!(msg.contains("bad option"));
    }

    #[test]
    fn filter_io_has_source() {
        let e = FilterError::Io {
            command: "copy-config.pl".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn filter_error_converts_into_bundle_error() {
        let e: BundleError = FilterError::Failed {
            command: "x".to_string(),
            code: 2,
            stderr: String::new(),
        }
        .into();
        assert!(matches!(e, BundleError::Filter(_)));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn all_error_types_are_send_sync() {
        assert_send_sync::<BundleError>();
        assert_send_sync::<LineError>();
        assert_send_sync::<FilterError>();
    }
}
