//! Filesystem query abstraction for dependency injection.
//!
//! Planning only *asks* the filesystem questions; it never mutates it. The
//! [`FileSystemOps`] trait lets planner tests describe which source paths
//! exist without creating them. Production code uses [`SystemFileSystemOps`];
//! tests use `MockFileSystemOps`.

use std::path::{Path, PathBuf};

/// Read-only filesystem queries used while planning a bundle.
pub trait FileSystemOps: std::fmt::Debug {
    /// Returns `true` if `path` exists (following symlinks).
    fn exists(&self, path: &Path) -> bool;

    /// Read a UTF-8 text file.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Resolve `path` against the current directory and normalize it.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the current directory cannot be
    /// determined.
    fn absolute(&self, path: &Path) -> std::io::Result<PathBuf>;
}

/// Production [`FileSystemOps`] implementation that delegates to [`std::fs`].
#[derive(Debug, Default)]
pub struct SystemFileSystemOps;

impl FileSystemOps for SystemFileSystemOps {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn absolute(&self, path: &Path) -> std::io::Result<PathBuf> {
        crate::paths::absolute(path)
    }
}

/// Mock [`FileSystemOps`] for unit tests.
///
/// # Example
///
/// ```ignore
/// let fs = MockFileSystemOps::new()
///     .with_existing("/models/lm.kenlm")
///     .with_existing("phrase-table.packed");
/// ```
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockFileSystemOps {
    existing: Vec<PathBuf>,
    files: std::collections::HashMap<PathBuf, String>,
    cwd: Option<PathBuf>,
}

#[cfg(test)]
impl MockFileSystemOps {
    /// Create an empty mock in which nothing exists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `path` as existing.
    #[must_use]
    pub fn with_existing(mut self, path: impl Into<PathBuf>) -> Self {
        let p = path.into();
        if !self.existing.contains(&p) {
            self.existing.push(p);
        }
        self
    }

    /// Register a readable file with `contents` (it also counts as existing).
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: &str) -> Self {
        let p = path.into();
        self.files.insert(p.clone(), contents.to_string());
        self.with_existing(p)
    }

    /// Set the directory relative paths resolve against. Without one,
    /// resolving a relative path fails as if the working directory had been
    /// removed.
    #[must_use]
    pub fn with_cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

#[cfg(test)]
impl FileSystemOps for MockFileSystemOps {
    fn exists(&self, path: &Path) -> bool {
        self.existing.iter().any(|p| p == path)
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, path.display().to_string())
        })
    }

    fn absolute(&self, path: &Path) -> std::io::Result<PathBuf> {
        if path.is_absolute() {
            return Ok(crate::paths::normalize(path));
        }
        self.cwd
            .as_ref()
            .map(|cwd| crate::paths::normalize(&cwd.join(path)))
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "current directory is unavailable",
                )
            })
    }
}
