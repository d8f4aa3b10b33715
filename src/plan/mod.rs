//! Turning a decoder configuration into an ordered list of bundle operations.
//!
//! Planning reads and validates everything up front but never touches the
//! destination; [`execute_operations`] does that afterwards. A failed plan
//! therefore leaves the filesystem exactly as it was.
mod execute;
mod operation;

pub use execute::{execute_operations, list_operations};
pub use operation::{Action, Operation};

use std::path::{Path, PathBuf};

use crate::config::filter::ConfigFilter;
use crate::config::line::{LineParts, line_specifies_path, parse_path, with_comment};
use crate::config::{OUTPUT_CONFIG_FILE_NAME, comments, split_lines};
use crate::error::{BundleError, LineError};
use crate::fs_ops::FileSystemOps;
use crate::launcher::{LAUNCHER_FILE_NAME, LAUNCHER_MODE, runner_text};
use crate::logging::Log;
use crate::naming::DestinationNamer;
use crate::options::BundleOptions;
use crate::paths;
use crate::resources::chmod::ChmodResource;
use crate::resources::copy::CopyResource;
use crate::resources::directory::{CreateDirResource, RemoveDirResource};
use crate::resources::file::WriteFileResource;
use crate::resources::symlink::SymlinkResource;

/// Bundle subdirectory that receives model artifacts.
pub const MODEL_DIR_NAME: &str = "model";

/// Per-run state for rewriting path-bearing lines.
pub struct Planner<'a> {
    opts: &'a BundleOptions,
    fs: &'a dyn FileSystemOps,
    log: &'a dyn Log,
    namer: DestinationNamer,
}

impl std::fmt::Debug for Planner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Planner")
            .field("dest_dir", &self.opts.dest_dir)
            .field("namer", &self.namer)
            .finish_non_exhaustive()
    }
}

impl<'a> Planner<'a> {
    /// Start a planning pass with a fresh destination namer.
    #[must_use]
    pub fn new(opts: &'a BundleOptions, fs: &'a dyn FileSystemOps, log: &'a dyn Log) -> Self {
        Self {
            opts,
            fs,
            log,
            namer: DestinationNamer::new(),
        }
    }

    /// Rewrite one path-bearing line and produce the operation that places
    /// its artifact in the bundle.
    ///
    /// Only the first occurrence of the path text in the config portion is
    /// replaced. A comment, if the line had one, is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::MissingPathToken`] for a line with no path token,
    /// [`LineError::PathNotFound`] when the referenced path is absent and
    /// [`LineError::AbsolutePath`] when a symlink target cannot be resolved.
    pub fn process_line_containing_path(
        &mut self,
        line: &str,
    ) -> Result<(String, Operation), LineError> {
        self.log
            .debug(&format!("Looking for a path in the line:\n    {line}"));
        let parts = LineParts::split(line);

        let token = parse_path(parts.config)?;
        self.log.debug(&format!("* Found path \"{token}\""));

        let source = paths::normalize(Path::new(token));
        let dest_name = self.namer.assign(&artifact_name(self.fs, &source, token));

        if !self.fs.exists(&source) {
            return Err(LineError::PathNotFound(source));
        }

        let dest_path = self.model_dir().join(&dest_name);
        let operation = if self.opts.symlink {
            let target =
                self.fs
                    .absolute(&source)
                    .map_err(|e| LineError::AbsolutePath {
                        path: source.clone(),
                        reason: e.to_string(),
                    })?;
            let description = format!("Linking {} to {}", dest_path.display(), target.display());
            Operation::new(
                Action::Symlink(SymlinkResource::new(target, dest_path.clone())),
                description,
            )
        } else {
            let description = format!(
                "Making a copy of {} at {}",
                source.display(),
                dest_path.display()
            );
            Operation::new(
                Action::Copy(CopyResource::new(source, dest_path.clone())),
                description,
            )
        };

        let replacement = if self.opts.absolute {
            dest_path.display().to_string()
        } else {
            format!("{MODEL_DIR_NAME}/{dest_name}")
        };
        let updated = parts.config.replacen(token, &replacement, 1);

        Ok((with_comment(&updated, parts.comment), operation))
    }

    fn model_dir(&self) -> PathBuf {
        self.opts.dest_dir.join(MODEL_DIR_NAME)
    }
}

/// Basename used for an artifact in `model/`.
///
/// Paths without a final component (`.`, `..`) take the name of the
/// directory they resolve to.
fn artifact_name(fs: &dyn FileSystemOps, source: &Path, token: &str) -> String {
    source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            fs.absolute(source)
                .ok()?
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| token.to_string())
}

/// Build the complete, ordered list of operations for one bundle.
///
/// Nothing is modified here. The destination check, the config read, the
/// filter run, and every referenced path are validated before the first
/// operation can execute.
///
/// # Errors
///
/// - [`BundleError::DestinationExists`] if the destination exists without `force`
/// - [`BundleError::ReadConfig`] if the configuration cannot be read
/// - [`BundleError::Filter`] if the configuration filter fails
/// - [`BundleError::Line`] if a path-bearing line is malformed or its path is missing
pub fn collect_operations(
    opts: &BundleOptions,
    filter: &dyn ConfigFilter,
    fs: &dyn FileSystemOps,
    log: &dyn Log,
) -> Result<Vec<Operation>, BundleError> {
    let mut operations = Vec::new();
    let dest_dir = &opts.dest_dir;

    if fs.exists(dest_dir) {
        if !opts.force {
            return Err(BundleError::DestinationExists(dest_dir.clone()));
        }
        operations.push(Operation::new(
            Action::RemoveDir(RemoveDirResource::new(dest_dir.clone())),
            format!(
                "Forcing deletion of existing destination directory \"{}\"",
                dest_dir.display()
            ),
        ));
    }

    operations.push(Operation::new(
        Action::CreateDir(CreateDirResource::new(dest_dir.join(MODEL_DIR_NAME))),
        format!("Creating destination directory \"{}\"", dest_dir.display()),
    ));

    let mut text = fs
        .read_to_string(&opts.config)
        .map_err(|source| BundleError::ReadConfig {
            path: opts.config.clone(),
            source,
        })?;
    if !opts.copy_config_options.is_empty() {
        text = filter.transform(&text, &opts.copy_config_options)?;
    }

    let mut planner = Planner::new(opts, fs, log);
    let mut lines = Vec::new();
    for (index, line) in split_lines(&text).into_iter().enumerate() {
        if !line_specifies_path(line) {
            lines.push(line.to_string());
            continue;
        }
        let (rewritten, operation) =
            planner
                .process_line_containing_path(line)
                .map_err(|source| BundleError::Line {
                    file: opts.config.display().to_string(),
                    line: index + 1,
                    source,
                })?;
        operations.push(operation);
        lines.push(rewritten);
    }

    if opts.suppress_comments {
        lines = comments::strip_comments(lines);
    }

    let config_path = dest_dir.join(OUTPUT_CONFIG_FILE_NAME);
    let mut config_text = lines.join("\n");
    config_text.push('\n');
    operations.push(Operation::new(
        Action::WriteFile(WriteFileResource::new(config_path.clone(), config_text)),
        format!(
            "Writing the updated joshua.config to {}",
            config_path.display()
        ),
    ));

    let launcher_path = dest_dir.join(LAUNCHER_FILE_NAME);
    operations.push(Operation::new(
        Action::WriteFile(WriteFileResource::new(
            launcher_path.clone(),
            runner_text(&opts.mem),
        )),
        format!(
            "Writing the bundle runner file \"{}\"",
            launcher_path.display()
        ),
    ));
    operations.push(Operation::new(
        Action::Chmod(ChmodResource::new(launcher_path, LAUNCHER_MODE)),
        "Making the bundle runner file executable",
    ));

    Ok(operations)
}
