//! The review request flow.
//!
//! `parse` and `execute` are the whole program minus process setup: they
//! parse arguments, work out the repository and target, resolve the reviewer
//! group and either describe (dry run) or perform the `gh pr edit` call.
//! Every handled failure is written to stderr and turned into exit code 1.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::{RrError, Result};
use crate::exit_codes;
use crate::gh::{build_add_reviewers_args, build_pull_request_url};
use crate::host::Host;
use crate::repository::validate_repository;
use crate::reviewers::{lookup_repository, resolve};
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;


/// Parse command line arguments.
///
/// `--help` and `--version` are printed to stdout and yield exit code 0;
/// any other parse error is printed to stderr and yields exit code 1.
pub fn parse<I, T>(
    args: I,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> std::result::Result<Cli, i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            emit(stdout, &err.render().to_string());
            exit_codes::SUCCESS
        }
        _ => {
            emit(stderr, &err.render().to_string());
            exit_codes::FAILURE
        }
    })
}

/// Run the request flow for already-parsed arguments.
pub fn execute(
    cli: &Cli,
    host: &dyn Host,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> i32 {
    match request_reviews(cli, host, stdout) {
        Ok(()) => exit_codes::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "request failed");
            emit(stderr, &format!("{}\n", err));
            err.exit_code()
        }
    }
}

fn request_reviews(cli: &Cli, host: &dyn Host, stdout: &mut dyn Write) -> Result<()> {
    let repository = match &cli.repo {
        Some(repo) => repo.clone(),
        None => host.current_repository()?,
    };

    validate_repository(&repository)?;

    let config_dir = cli.config_dir.clone().unwrap_or_else(default_config_dir);
    let config = Config::load(&config_dir)?;
    tracing::debug!(
        path = ?config.path,
        repositories = config.repositories.len(),
        "config loaded"
    );

    let reviewers = resolve(&config, lookup_repository(cli.global, &repository), &cli.from)?;

    let target = match &cli.target {
        Some(target) => target.clone(),
        None => host.current_branch()?,
    };

    if cli.dry_run {
        let mut out = format!(
            "would add the following as reviewers to {}\n",
            describe_target(&repository, &target)
        );
        out.push_str(&format_reviewers(reviewers));
        emit(stdout, &out);
        return Ok(());
    }

    let args = build_add_reviewers_args(&repository, &target, reviewers);
    let output = host.exec(&args)?;

    if !output.stderr.is_empty() {
        return Err(RrError::ExternalCommandFailed(output.stderr.trim().to_string()));
    }

    let url = match output.stdout.trim() {
        "" => describe_target(&repository, &target),
        url => url.to_string(),
    };

    let mut out = format!("added the following as reviewers to {}\n", url);
    out.push_str(&format_reviewers(reviewers));
    emit(stdout, &out);

    Ok(())
}

/// The user's home directory, used when `--config-dir` is not given.
///
/// Not being able to find it means the environment is broken beyond anything
/// gh-rr can recover from, so this aborts rather than returning an error.
fn default_config_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(dir) => dir,
        None => panic!("failed to get user home dir"),
    }
}

/// Human readable name for the pull request being edited.
fn describe_target(repository: &str, target: &str) -> String {
    if !target.is_empty() && target.chars().all(|c| c.is_ascii_digit()) {
        build_pull_request_url(repository, target)
    } else if target.starts_with("http") {
        target.to_string()
    } else {
        format!("the pull request for {} in {}", target, repository)
    }
}

fn format_reviewers(reviewers: &[String]) -> String {
    if reviewers.is_empty() {
        return "  (the group has no reviewers)\n".to_string();
    }

    reviewers
        .iter()
        .map(|reviewer| format!("  - {}\n", reviewer))
        .collect()
}

// Write errors (e.g. a closed pipe) are ignored.
fn emit(stream: &mut dyn Write, text: &str) {
    let _ = stream.write_all(text.as_bytes());
    let _ = stream.flush();
}
