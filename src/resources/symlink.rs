//! Symlink resource.
use anyhow::Result;
use std::path::PathBuf;

use super::{Applicable, ResourceChange};

/// Links a bundle entry to an artifact outside the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymlinkResource {
    /// The source file/directory (what the symlink points to).
    pub source: PathBuf,
    /// The target path (where the symlink will be created).
    pub target: PathBuf,
}

impl SymlinkResource {
    /// Create a new symlink resource.
    #[must_use]
    pub const fn new(source: PathBuf, target: PathBuf) -> Self {
        Self { source, target }
    }
}

impl Applicable for SymlinkResource {
    fn description(&self) -> String {
        format!("{} -> {}", self.target.display(), self.source.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        super::helpers::fs::ensure_parent_dir(&self.target)?;
        super::helpers::fs::create_symlink(&self.source, &self.target)?;
        Ok(ResourceChange::Applied)
    }
}
