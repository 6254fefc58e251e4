//! Git command runner for gh-rr.
//!
//! Used to infer the repository (from the configured remotes) and the pull
//! request target (from the checked-out branch) when they are not given on
//! the command line.

use crate::error::{RrError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Remotes checked first when inferring the repository, in order of preference.
const PREFERRED_REMOTES: [&str; 3] = ["upstream", "github", "origin"];

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    /// Create a new GitOutput from raw output bytes.
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

/// Run a git command with the specified working directory.
///
/// Failures are reported as `RepositoryInferenceFailed`, since git is only
/// consulted to work out which repository and branch the user is on.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            RrError::RepositoryInferenceFailed(format!(
                "failed to execute git: {} (is git installed?)",
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        return Ok(git_output);
    }

    let stderr = &git_output.stderr;
    if stderr.contains("not a git repository") {
        return Err(RrError::RepositoryInferenceFailed(
            "not inside a git repository; pass --repo <owner>/<repository>".to_string(),
        ));
    }

    Err(RrError::RepositoryInferenceFailed(format!(
        "git {} failed (exit code {}): {}",
        args.first().unwrap_or(&""),
        output.status.code().unwrap_or(-1),
        if stderr.is_empty() {
            &git_output.stdout
        } else {
            stderr
        }
    )))
}

/// Infer `<owner>/<repository>` from the git remotes of the repository at `cwd`.
///
/// Remotes named `upstream`, `github` and `origin` are preferred in that
/// order; otherwise the first remote with a recognisable URL is used.
pub fn current_repository<P: AsRef<Path>>(cwd: P) -> Result<String> {
    let cwd = cwd.as_ref();
    let remotes = run_git(cwd, &["remote"])?;
    let names = remotes.lines();

    if names.is_empty() {
        return Err(RrError::RepositoryInferenceFailed(
            "no git remotes found; pass --repo <owner>/<repository>".to_string(),
        ));
    }

    let ordered = PREFERRED_REMOTES
        .iter()
        .copied()
        .filter(|preferred| names.contains(preferred))
        .chain(
            names
                .iter()
                .copied()
                .filter(|name| !PREFERRED_REMOTES.contains(name)),
        );

    for remote in ordered {
        let url = run_git(cwd, &["remote", "get-url", remote])?;
        if let Some(repository) = parse_remote_url(&url.stdout) {
            tracing::debug!(remote, %repository, "inferred repository from git remote");
            return Ok(repository);
        }
        tracing::debug!(remote, url = %url.stdout, "skipping remote with unrecognised url");
    }

    Err(RrError::RepositoryInferenceFailed(
        "none of the git remotes point to a repository; pass --repo <owner>/<repository>"
            .to_string(),
    ))
}

/// Name of the branch checked out at `cwd`.
pub fn current_branch<P: AsRef<Path>>(cwd: P) -> Result<String> {
    let output = run_git(cwd, &["branch", "--show-current"])?;

    if output.stdout.is_empty() {
        return Err(RrError::RepositoryInferenceFailed(
            "not on a branch (detached HEAD); pass the pull request number, branch or URL"
                .to_string(),
        ));
    }

    Ok(output.stdout)
}

/// Extract `<owner>/<repository>` from a git remote URL.
///
/// Supports `https://host/owner/repo(.git)`, `ssh://git@host[:port]/owner/repo(.git)`
/// and scp-like `git@host:owner/repo(.git)`. Returns `None` for anything else,
/// including local paths.
pub fn parse_remote_url(url: &str) -> Option<String> {
    let url = url.trim();

    let path = if let Some((_, rest)) = url.split_once("://") {
        // drop the host (and any credentials or port) before the first '/'
        rest.split_once('/')?.1
    } else if let Some((host, path)) = url.split_once(':') {
        if host.is_empty() || host.contains('/') {
            return None;
        }
        path
    } else {
        return None;
    };

    let path = path.trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    let (owner, name) = path.split_once('/')?;
    if owner.is_empty() || name.is_empty() || name.contains('/') {
        return None;
    }

    Some(format!("{}/{}", owner, name))
}
