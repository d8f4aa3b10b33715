//! Deferred units of work produced by planning.
use anyhow::Result;

use crate::resources::chmod::ChmodResource;
use crate::resources::copy::CopyResource;
use crate::resources::directory::{CreateDirResource, RemoveDirResource};
use crate::resources::file::WriteFileResource;
use crate::resources::symlink::SymlinkResource;
use crate::resources::{Applicable, ResourceChange};

/// The filesystem change an [`Operation`] performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Delete an existing destination.
    RemoveDir(RemoveDirResource),
    /// Create a directory and its ancestors.
    CreateDir(CreateDirResource),
    /// Copy a file or directory tree.
    Copy(CopyResource),
    /// Link to a file or directory.
    Symlink(SymlinkResource),
    /// Write a whole text file.
    WriteFile(WriteFileResource),
    /// Change permission bits.
    Chmod(ChmodResource),
}

impl Action {
    fn resource(&self) -> &dyn Applicable {
        match self {
            Self::RemoveDir(r) => r,
            Self::CreateDir(r) => r,
            Self::Copy(r) => r,
            Self::Symlink(r) => r,
            Self::WriteFile(r) => r,
            Self::Chmod(r) => r,
        }
    }
}

impl Applicable for Action {
    fn description(&self) -> String {
        self.resource().description()
    }

    fn apply(&self) -> Result<ResourceChange> {
        self.resource().apply()
    }
}

/// An action paired with the message shown when it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// What to do.
    pub action: Action,
    /// User-facing description.
    pub description: String,
}

impl Operation {
    /// Pair `action` with `description`.
    #[must_use]
    pub fn new(action: Action, description: impl Into<String>) -> Self {
        Self {
            action,
            description: description.into(),
        }
    }
}
