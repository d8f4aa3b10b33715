//! Top-level command orchestration.
pub mod bundle;
