//! Error types for the gh-rr CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Every variant is recovered at the command boundary and reported on stderr.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gh-rr operations.
#[derive(Error, Debug)]
pub enum RrError {
    /// The configuration file does not exist.
    #[error("please create {} to configure your repositories", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// The configuration file exists but could not be read or decoded.
    #[error("{}", malformed_message(.path.as_ref(), .message))]
    MalformedConfig {
        path: Option<PathBuf>,
        message: String,
    },

    /// No entry exists for the repository in the configuration.
    #[error("no reviewers are configured for {repository}")]
    RepositoryNotConfigured { repository: String },

    /// The repository is configured, but not with the requested group.
    #[error("{repository} does not have a group named {group}")]
    GroupNotConfigured { repository: String, group: String },

    /// The repository is not in `<owner>/<repository>` form.
    #[error("{0}")]
    InvalidRepositoryFormat(String),

    /// `gh` could not be run or reported an error.
    #[error("could not add reviewers: {0}")]
    ExternalCommandFailed(String),

    /// The current repository (or branch) could not be inferred.
    #[error("{0}")]
    RepositoryInferenceFailed(String),
}

fn malformed_message(path: Option<&PathBuf>, message: &str) -> String {
    match path {
        Some(path) => format!("failed to parse {}: {}", path.display(), message),
        None => format!("failed to parse config: {}", message),
    }
}

impl RrError {
    /// Returns the exit code for this error.
    ///
    /// All handled failures share one code; the message carries the detail.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        RrError::MalformedConfig {
            path: None,
            message: message.into(),
        }
    }
}

/// Result type alias for gh-rr operations.
pub type Result<T> = std::result::Result<T, RrError>;
