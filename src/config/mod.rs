//! Configuration model for gh-rr.
//!
//! This module defines the Config struct that represents `<config-dir>/gh-rr.yml`.
//! Each repository is written either as a bare list of reviewers (the `default`
//! group) or as a mapping of group names to lists of reviewers; both shapes
//! are normalized into the same model at load time.

mod model;
mod operations;


// Re-export public API
pub use model::{Config, DEFAULT_GROUP, ReviewerGroups};
pub use operations::CONFIG_FILE_NAME;
