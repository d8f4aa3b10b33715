//! Copy resource.
use anyhow::Result;
use std::path::PathBuf;

use super::{Applicable, ResourceChange};

/// Copies a file, or a whole directory tree, into the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyResource {
    /// File or directory to copy.
    pub source: PathBuf,
    /// Destination path (must not exist yet).
    pub target: PathBuf,
}

impl CopyResource {
    /// Create a new copy resource.
    #[must_use]
    pub const fn new(source: PathBuf, target: PathBuf) -> Self {
        Self { source, target }
    }
}

impl Applicable for CopyResource {
    fn description(&self) -> String {
        format!("copy {} -> {}", self.source.display(), self.target.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        super::helpers::fs::ensure_parent_dir(&self.target)?;

        if self.source.is_dir() {
            super::helpers::fs::copy_dir_recursive(&self.source, &self.target)?;
        } else {
            super::helpers::fs::copy_file(&self.source, &self.target)?;
        }
        Ok(ResourceChange::Applied)
    }
}
