//! Permission changes on bundle files.
use anyhow::{Context as _, Result};
use std::path::PathBuf;

use super::{Applicable, ResourceChange};

/// A file permission change (Unix only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChmodResource {
    /// Target file path.
    pub target: PathBuf,
    /// Permission bits, e.g. `0o755`.
    pub mode: u32,
}

impl ChmodResource {
    /// Create a new chmod resource.
    #[must_use]
    pub const fn new(target: PathBuf, mode: u32) -> Self {
        Self { target, mode }
    }
}

impl Applicable for ChmodResource {
    fn description(&self) -> String {
        format!("{:o} {}", self.mode, self.target.display())
    }

    fn apply(&self) -> Result<ResourceChange> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let perms = std::fs::Permissions::from_mode(self.mode);
            std::fs::set_permissions(&self.target, perms)
                .with_context(|| format!("set permissions: {}", self.target.display()))?;
            Ok(ResourceChange::Applied)
        }

        #[cfg(not(unix))]
        {
            // Still fail on a missing target so behaviour matches Unix.
            std::fs::metadata(&self.target)
                .with_context(|| format!("set permissions: {}", self.target.display()))?;
            Ok(ResourceChange::Skipped {
                reason: "chmod not supported on this platform".to_string(),
            })
        }
    }
}
