//! The bundle command: plan, then execute or list.
use anyhow::Result;

use crate::config::filter::{ConfigFilter, CopyConfigScript};
use crate::fs_ops::{FileSystemOps, SystemFileSystemOps};
use crate::logging::Log;
use crate::options::BundleOptions;
use crate::plan;

/// Build the bundle described by `opts` using the real filter and filesystem.
///
/// # Errors
///
/// Returns an error if planning fails (nothing is modified in that case) or
/// if an operation fails while executing.
pub fn run(opts: &BundleOptions, log: &dyn Log) -> Result<()> {
    let filter = CopyConfigScript::new(&opts.joshua_root, opts.tmpdir.clone());
    run_with(opts, &filter, &SystemFileSystemOps, log)
}

/// Build the bundle with injected collaborators.
///
/// # Errors
///
/// See [`run`].
pub fn run_with(
    opts: &BundleOptions,
    filter: &dyn ConfigFilter,
    fs: &dyn FileSystemOps,
    log: &dyn Log,
) -> Result<()> {
    if let Some(source) = &opts.source {
        log.debug(&format!("source language: {source}"));
    }
    log.debug(&format!("normalizer: {}", opts.normalizer.display()));
    log.debug(&format!("tokenizer: {}", opts.tokenizer.display()));

    log.stage("Planning bundle");
    let operations = plan::collect_operations(opts, filter, fs, log)?;
    log.debug(&format!("{} operations planned", operations.len()));

    if opts.dry_run {
        plan::list_operations(&operations, log);
        return Ok(());
    }

    log.stage(&format!("Writing bundle to {}", opts.dest_dir.display()));
    plan::execute_operations(&operations, log)
}
