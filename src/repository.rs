//! Repository name validation.

use crate::error::{RrError, Result};

/// Check that `repository` looks like `<owner>/<repository>`.
///
/// There must be exactly one `/`, and values that look like URLs are
/// rejected since `gh --repo` wants the short form.
pub fn validate_repository(repository: &str) -> Result<()> {
    if repository.is_empty() {
        return Err(RrError::InvalidRepositoryFormat(
            "repository must be in <owner>/<repository> format".to_string(),
        ));
    }

    if repository.matches('/').count() != 1 || repository.starts_with("http") {
        return Err(RrError::InvalidRepositoryFormat(
            "repository should be in the format of <owner>/<repository>".to_string(),
        ));
    }

    Ok(())
}
