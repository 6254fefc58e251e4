//! GitHub CLI (`gh`) command construction and execution.
//!
//! Building the argument vector is kept separate from running it so the
//! exact command can be shown in dry runs and asserted on in tests.

use crate::error::{RrError, Result};
use std::process::{Command, Output};

/// Captured output of a `gh` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GhOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GhOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Build the arguments for `gh pr edit` that add `reviewers` to `target`.
///
/// `target` may be a pull request number, branch name or URL; it is passed
/// through untouched.
///
/// # Examples
///
/// ```ignore
/// let args = build_add_reviewers_args("acme/app", "123", &["alice".to_string()]);
/// assert_eq!(args, ["pr", "edit", "123", "--repo", "acme/app", "--add-reviewer", "alice"]);
/// ```
pub fn build_add_reviewers_args(repository: &str, target: &str, reviewers: &[String]) -> Vec<String> {
    let mut args = vec![
        "pr".to_string(),
        "edit".to_string(),
        target.to_string(),
        "--repo".to_string(),
        repository.to_string(),
    ];

    for reviewer in reviewers {
        args.push("--add-reviewer".to_string());
        args.push(reviewer.clone());
    }

    args
}

/// URL of pull request `pr` in `repository` on github.com.
pub fn build_pull_request_url(repository: &str, pr: &str) -> String {
    format!("https://github.com/{}/pull/{}", repository, pr)
}

/// Run `gh` with the given arguments.
///
/// A non-zero exit status is not an error here: callers decide based on
/// whether anything was written to stderr, matching how `gh` reports failures
/// to extensions.
///
/// # Returns
///
/// * `Ok(GhOutput)` - `gh` ran; its trimmed stdout and stderr
/// * `Err(RrError::ExternalCommandFailed)` - `gh` could not be started
pub fn run_gh(args: &[String]) -> Result<GhOutput> {
    tracing::debug!(args = %args.join(" "), "running gh");

    let output = Command::new("gh").args(args).output().map_err(|e| {
        RrError::ExternalCommandFailed(format!("failed to execute gh: {} (is gh installed?)", e))
    })?;

    let gh_output = GhOutput::from_output(&output);

    if output.status.success() {
        tracing::debug!(stdout = %gh_output.stdout, "gh succeeded");
    } else {
        tracing::debug!(
            exit_code = output.status.code().unwrap_or(-1),
            stderr = %gh_output.stderr,
            "gh failed"
        );
    }

    Ok(gh_output)
}
