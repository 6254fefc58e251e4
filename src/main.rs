//! gh-rr: request pull request reviews from pre-configured groups of reviewers.
//!
//! This is the main entry point for the `gh-rr` CLI (usually run as a `gh`
//! extension, `gh rr`). It parses arguments, sets up logging, and hands off to
//! the request flow, which reports errors and picks the exit code.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod gh;
pub mod git;
pub mod host;
pub mod repository;
pub mod reviewers;

#[cfg(test)]
mod test_support;

use host::SystemHost;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let cli = match commands::parse(std::env::args_os(), &mut stdout, &mut stderr) {
        Ok(cli) => cli,
        Err(code) => return ExitCode::from(code as u8),
    };

    init_logging(cli.verbose);

    let code = commands::execute(&cli, &SystemHost, &mut stdout, &mut stderr);
    ExitCode::from(code as u8)
}

/// Log to stderr. `RUST_LOG` controls the filter unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("gh_rr=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}
