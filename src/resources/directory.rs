//! Directory creation and removal.
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use super::{Applicable, ResourceChange};

/// Creates a directory and any missing ancestors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDirResource {
    /// Directory to create.
    pub path: PathBuf,
}

impl CreateDirResource {
    /// Create a new directory-creation resource.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Applicable for CreateDirResource {
    fn description(&self) -> String {
        format!("mkdir -p {}", self.path.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("creating directory {}", self.path.display()))?;
        Ok(ResourceChange::Applied)
    }
}

/// Removes a directory tree (or a lone file) at a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveDirResource {
    /// Path to remove.
    pub path: PathBuf,
}

impl RemoveDirResource {
    /// Create a new removal resource.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Applicable for RemoveDirResource {
    fn description(&self) -> String {
        format!("rm -r {}", self.path.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        let meta = std::fs::symlink_metadata(&self.path)
            .with_context(|| format!("reading metadata: {}", self.path.display()))?;
        if meta.is_dir() {
            std::fs::remove_dir_all(&self.path)
        } else {
            std::fs::remove_file(&self.path)
        }
        .with_context(|| format!("removing {}", self.path.display()))?;
        Ok(ResourceChange::Applied)
    }
}
