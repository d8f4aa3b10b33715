// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed workspace holding model artifacts,
// a source configuration and a bundle destination, so each integration test
// can set up an isolated run without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use joshua_bundle::config::filter::ConfigFilter;
use joshua_bundle::error::FilterError;
use joshua_bundle::options::BundleOptions;

/// Filter that returns the configuration unchanged.
#[derive(Debug, Default)]
pub struct Passthrough;

impl ConfigFilter for Passthrough {
    fn transform(&self, text: &str, _options: &str) -> Result<String, FilterError> {
        Ok(text.to_string())
    }
}

/// An isolated bundling workspace backed by a [`tempfile::TempDir`].
///
/// Layout:
/// - `models/`          model artifacts referenced by the config
/// - `tune/joshua.config` the source configuration
/// - `bundle/`          the destination (absent until a run creates it)
/// - `joshua/`          a stand-in install root
pub struct BundleFixture {
    /// Temporary directory holding the whole workspace.
    pub root: tempfile::TempDir,
}

impl BundleFixture {
    /// Create an empty workspace.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        std::fs::create_dir_all(root.path().join("models")).expect("create models dir");
        std::fs::create_dir_all(root.path().join("tune")).expect("create tune dir");
        std::fs::create_dir_all(root.path().join("joshua/scripts")).expect("create joshua dir");
        Self { root }
    }

    /// Path to the workspace root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write a model file under `models/` and return its absolute path.
    pub fn model_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join("models").join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create model parent");
        }
        std::fs::write(&path, contents).expect("write model file");
        path
    }

    /// Write the source configuration and return its path.
    pub fn write_config(&self, text: &str) -> PathBuf {
        let path = self.config_path();
        std::fs::write(&path, text).expect("write config");
        path
    }

    /// Path of the source configuration.
    pub fn config_path(&self) -> PathBuf {
        self.path().join("tune/joshua.config")
    }

    /// Bundle destination directory.
    pub fn dest(&self) -> PathBuf {
        self.path().join("bundle")
    }

    /// Stand-in `JOSHUA` install root.
    pub fn joshua_root(&self) -> PathBuf {
        self.path().join("joshua")
    }

    /// Options for a default run with filtering disabled.
    pub fn options(&self) -> BundleOptions {
        let mut opts = BundleOptions::new(self.config_path(), self.dest(), self.joshua_root());
        opts.copy_config_options = String::new();
        opts
    }

    /// Read a file inside the bundle.
    pub fn read_bundle(&self, rel: &str) -> String {
        std::fs::read_to_string(self.dest().join(rel)).expect("read bundle file")
    }
}
