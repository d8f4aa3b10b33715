//! Filesystem primitives applied when a bundle plan executes.
//!
//! Each resource describes one concrete change (copy this, link that, write
//! these bytes) and knows how to apply it. Resources do no validation of
//! their own beyond what the OS reports; planning has already checked that
//! every source exists.
pub mod chmod;
pub mod copy;
pub mod directory;
pub mod file;
pub mod helpers;
pub mod symlink;

use anyhow::Result;

/// Minimal interface for resources that can be described and applied.
pub trait Applicable {
    /// Human-readable description of this resource.
    fn description(&self) -> String;

    /// Apply the resource change.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be made due to I/O failures,
    /// permission issues, or an unexpected existing target.
    fn apply(&self) -> Result<ResourceChange>;
}

/// Result of applying a resource change.
///
/// # Examples
///
/// ```
/// use joshua_bundle::resources::ResourceChange;
///
/// let applied = ResourceChange::Applied;
/// let skipped = ResourceChange::Skipped { reason: "not supported".into() };
///
/// assert_eq!(applied, ResourceChange::Applied);
/// assert_ne!(applied, skipped);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceChange {
    /// The change was made.
    Applied,
    /// The change could not be made on this platform and was left out.
    Skipped {
        /// Reason why the resource was skipped.
        reason: String,
    },
}
