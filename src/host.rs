//! The outside world as seen by the `request` flow: repository inference and
//! the `gh` executor.
//!
//! Commands take a `&dyn Host` so tests can run the whole flow against a fake
//! that records what would have been sent to `gh`.

use crate::error::{RrError, Result};
use crate::gh::{self, GhOutput};
use crate::git;
use std::env;
use std::path::PathBuf;

/// Environment variable `gh` itself uses to select a repository.
pub const GH_REPO_ENV: &str = "GH_REPO";

/// `GH_REPO` may be `[HOST/]OWNER/REPO`; only `OWNER/REPO` is wanted here.
fn strip_host(repository: &str) -> String {
    match repository.split('/').collect::<Vec<_>>().as_slice() {
        [_host, owner, name] => format!("{}/{}", owner, name),
        _ => repository.to_string(),
    }
}

/// Collaborators that touch processes or the working directory.
pub trait Host {
    /// The `<owner>/<repository>` the user is working in.
    fn current_repository(&self) -> Result<String>;

    /// The branch checked out in the working directory.
    fn current_branch(&self) -> Result<String>;

    /// Run `gh` with `args`, returning whatever it printed.
    fn exec(&self, args: &[String]) -> Result<GhOutput>;
}

/// The real host: `git` in the current directory and `gh` from `PATH`.
#[derive(Debug, Default)]
pub struct SystemHost;

impl SystemHost {
    fn cwd() -> Result<PathBuf> {
        env::current_dir().map_err(|e| {
            RrError::RepositoryInferenceFailed(format!(
                "failed to get current working directory: {}",
                e
            ))
        })
    }
}

impl Host for SystemHost {
    fn current_repository(&self) -> Result<String> {
        if let Ok(repository) = env::var(GH_REPO_ENV) {
            let repository = repository.trim();
            if !repository.is_empty() {
                tracing::debug!(repository, "using repository from {}", GH_REPO_ENV);
                return Ok(strip_host(repository));
            }
        }

        git::current_repository(Self::cwd()?)
    }

    fn current_branch(&self) -> Result<String> {
        git::current_branch(Self::cwd()?)
    }

    fn exec(&self, args: &[String]) -> Result<GhOutput> {
        gh::run_gh(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_host() {
        assert_eq!(strip_host("octocat/hello-world"), "octocat/hello-world");
        assert_eq!(
            strip_host("github.example.com/octocat/hello-world"),
            "octocat/hello-world"
        );
        assert_eq!(strip_host("hello-world"), "hello-world");
    }
}
