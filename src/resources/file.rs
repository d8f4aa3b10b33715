//! Whole-file write resource.
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use super::{Applicable, ResourceChange};

/// Writes text to a file, replacing any previous content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFileResource {
    /// File to write.
    pub path: PathBuf,
    /// Complete file contents.
    pub contents: String,
}

impl WriteFileResource {
    /// Create a new write resource.
    #[must_use]
    pub const fn new(path: PathBuf, contents: String) -> Self {
        Self { path, contents }
    }
}

impl Applicable for WriteFileResource {
    fn description(&self) -> String {
        format!("write {} bytes to {}", self.contents.len(), self.path.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        std::fs::write(&self.path, &self.contents)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(ResourceChange::Applied)
    }
}
