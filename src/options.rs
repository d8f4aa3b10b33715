//! Resolved settings for one bundling run.
//!
//! [`BundleOptions`] is what the planner consumes: the parsed command line
//! plus everything derived from the `JOSHUA` install root.
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::cli::Cli;
use crate::error::BundleError;
use crate::paths;

/// Environment variable naming the Joshua install root.
pub const JOSHUA_ENV: &str = "JOSHUA";

const DEFAULT_NORMALIZER: &str = "scripts/preparation/normalize.pl";
const DEFAULT_TOKENIZER: &str = "scripts/preparation/tokenize.pl";

/// Interpret a raw `JOSHUA` value; unset or empty is an error.
///
/// # Errors
///
/// Returns [`BundleError::MissingEnvironment`] when `value` is `None` or empty.
pub fn joshua_root_from(value: Option<OsString>) -> Result<PathBuf, BundleError> {
    match value {
        Some(v) if !v.is_empty() => Ok(PathBuf::from(v)),
        _ => Err(BundleError::MissingEnvironment(JOSHUA_ENV)),
    }
}

/// Read the Joshua install root from the environment.
///
/// # Errors
///
/// Returns [`BundleError::MissingEnvironment`] when `JOSHUA` is unset or empty.
pub fn joshua_root() -> Result<PathBuf, BundleError> {
    joshua_root_from(std::env::var_os(JOSHUA_ENV))
}

/// Everything a bundling run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOptions {
    /// Source decoder configuration file.
    pub config: PathBuf,
    /// Bundle directory to create. Absolute when `absolute` is set.
    pub dest_dir: PathBuf,
    /// Remove an existing `dest_dir` first.
    pub force: bool,
    /// Options passed to the config filter; empty skips filtering.
    pub copy_config_options: String,
    /// Default JVM heap size baked into the launcher.
    pub mem: String,
    /// Link model artifacts instead of copying them.
    pub symlink: bool,
    /// Rewrite config paths as absolute destination paths.
    pub absolute: bool,
    /// Strip comments and blank-line runs from the written config.
    pub suppress_comments: bool,
    /// Plan and list operations without executing them.
    pub dry_run: bool,
    /// Source language code.
    pub source: Option<String>,
    /// Sentence normalizer applied to the model.
    pub normalizer: PathBuf,
    /// Sentence tokenizer applied to the model.
    pub tokenizer: PathBuf,
    /// Temporary directory for the config filter.
    pub tmpdir: PathBuf,
    /// Joshua install root.
    pub joshua_root: PathBuf,
}

impl BundleOptions {
    /// Build options from a parsed command line and the install root.
    ///
    /// # Errors
    ///
    /// Returns an error if `--absolute` is given and the current directory
    /// cannot be determined.
    pub fn from_cli(cli: Cli, joshua_root: PathBuf) -> Result<Self> {
        let dest_dir = if cli.absolute {
            paths::absolute(&cli.dest_dir).with_context(|| {
                format!("resolving destination directory {}", cli.dest_dir.display())
            })?
        } else {
            cli.dest_dir
        };

        Ok(Self {
            config: cli.config,
            dest_dir,
            force: cli.force,
            copy_config_options: cli.copy_config_options,
            mem: cli.mem,
            symlink: cli.symlink,
            absolute: cli.absolute,
            suppress_comments: cli.suppress_comments,
            dry_run: cli.dry_run,
            source: cli.source,
            normalizer: cli
                .normalizer
                .unwrap_or_else(|| joshua_root.join(DEFAULT_NORMALIZER)),
            tokenizer: cli
                .tokenizer
                .unwrap_or_else(|| joshua_root.join(DEFAULT_TOKENIZER)),
            tmpdir: cli.tmpdir,
            joshua_root,
        })
    }

    /// Defaults for a run over `config` into `dest_dir`, as if no flags had
    /// been given.
    #[must_use]
    pub fn new(config: PathBuf, dest_dir: PathBuf, joshua_root: PathBuf) -> Self {
        Self {
            config,
            dest_dir,
            force: false,
            copy_config_options: crate::cli::DEFAULT_COPY_CONFIG_OPTIONS.to_string(),
            mem: "4g".to_string(),
            symlink: false,
            absolute: false,
            suppress_comments: false,
            dry_run: false,
            source: None,
            normalizer: joshua_root.join(DEFAULT_NORMALIZER),
            tokenizer: joshua_root.join(DEFAULT_TOKENIZER),
            tmpdir: PathBuf::from("/tmp"),
            joshua_root,
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser as _;

    #[test]
    fn unset_joshua_is_an_error() {
        let err = joshua_root_from(None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The JOSHUA environment variable must be defined."
        );
    }

    #[test]
    fn empty_joshua_is_an_error() {
        assert!(joshua_root_from(Some(OsString::new())).is_err());
    }

    #[test]
    fn joshua_value_becomes_root() {
        let root = joshua_root_from(Some(OsString::from("/opt/joshua"))).unwrap();
        assert_eq!(root, PathBuf::from("/opt/joshua"));
    }

    #[test]
    fn defaults_resolve_against_root() {
        let cfg = tempfile::NamedTempFile::new().unwrap();
        let cli = Cli::parse_from(["joshua-bundle", cfg.path().to_str().unwrap(), "bundle"]);
        let opts = BundleOptions::from_cli(cli, PathBuf::from("/opt/joshua")).unwrap();

        assert_eq!(
            opts.normalizer,
            PathBuf::from("/opt/joshua/scripts/preparation/normalize.pl")
        );
        assert_eq!(
            opts.tokenizer,
            PathBuf::from("/opt/joshua/scripts/preparation/tokenize.pl")
        );
        assert_eq!(opts.dest_dir, PathBuf::from("bundle"));
        assert_eq!(opts, BundleOptions::new(cfg.path().to_path_buf(), "bundle".into(), "/opt/joshua".into()));
    }

    #[test]
    fn explicit_tools_win_over_defaults() {
        let cfg = tempfile::NamedTempFile::new().unwrap();
        let cli = Cli::parse_from([
            "joshua-bundle",
            cfg.path().to_str().unwrap(),
            "bundle",
            "--normalizer",
            "/usr/bin/norm",
            "--tokenizer",
            "/usr/bin/tok",
        ]);
        let opts = BundleOptions::from_cli(cli, PathBuf::from("/opt/joshua")).unwrap();
        assert_eq!(opts.normalizer, PathBuf::from("/usr/bin/norm"));
        assert_eq!(opts.tokenizer, PathBuf::from("/usr/bin/tok"));
    }

    #[test]
    fn absolute_mode_anchors_destination() {
        let cfg = tempfile::NamedTempFile::new().unwrap();
        let cli = Cli::parse_from([
            "joshua-bundle",
            cfg.path().to_str().unwrap(),
            "out/./bundle",
            "--absolute",
        ]);
        let opts = BundleOptions::from_cli(cli, PathBuf::from("/opt/joshua")).unwrap();
        assert!(opts.dest_dir.is_absolute());
        assert!(opts.dest_dir.ends_with("out/bundle"));
    }
}
