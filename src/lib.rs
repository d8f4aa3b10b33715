//! Joshua decoder bundler.
//!
//! Packages a decoder configuration and every model artifact it references
//! into one relocatable directory:
//!
//! ```text
//! bundle/
//! ├── joshua          launcher script (0755)
//! ├── joshua.config   rewritten configuration
//! └── model/          copied (or linked) artifacts
//! ```
//!
//! The public API is organised into layers:
//!
//! - **[`config`]**: split, classify and rewrite configuration lines
//! - **[`plan`]**: turn a configuration into ordered [`plan::Operation`]s, then run them
//! - **[`resources`]**: the filesystem primitives operations apply
//! - **[`commands`]**: top-level orchestration used by the binary
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod fs_ops;
pub mod launcher;
pub mod logging;
pub mod naming;
pub mod options;
pub mod paths;
pub mod plan;
pub mod resources;
