//! Reviewer group resolution.
//!
//! Looks up the reviewers configured for a repository/group pair. "Repository
//! unknown" and "group unknown" are reported as distinct errors so the CLI can
//! tell the user which part of their config is missing.

use crate::config::Config;
use crate::error::{RrError, Result};

/// Reserved repository key holding groups available to every repository.
pub const GLOBAL_REPOSITORY: &str = "*";

/// Returns the repository key to resolve against.
///
/// In global mode this is always the wildcard, so a repository-local group of
/// the same name is never consulted.
pub fn lookup_repository(global: bool, repository: &str) -> &str {
    if global { GLOBAL_REPOSITORY } else { repository }
}

/// Resolve the reviewers for `group` in `repository`.
///
/// The repository is matched case-insensitively; the group name is not.
/// The returned list is exactly as configured, duplicates and order included.
/// An empty list is a valid result.
///
/// # Returns
///
/// * `Ok(&[String])` - The configured reviewers
/// * `Err(RrError::RepositoryNotConfigured)` - No entry for the repository
/// * `Err(RrError::GroupNotConfigured)` - The repository has no such group
pub fn resolve<'a>(config: &'a Config, repository: &str, group: &str) -> Result<&'a [String]> {
    let groups = config
        .groups(repository)
        .ok_or_else(|| RrError::RepositoryNotConfigured {
            repository: repository.to_string(),
        })?;

    let reviewers = groups
        .get(group)
        .ok_or_else(|| RrError::GroupNotConfigured {
            repository: repository.to_string(),
            group: group.to_string(),
        })?;

    tracing::debug!(repository, group, count = reviewers.len(), "resolved reviewers");

    Ok(reviewers)
}
