//! CLI argument parsing for gh-rr.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The request flow itself lives in the `commands` module.

use crate::config::DEFAULT_GROUP;
use clap::Parser;
use std::path::PathBuf;

/// Request pull request reviews from pre-configured groups of reviewers.
///
/// Groups are read from `gh-rr.yml` in the config directory (your home
/// directory by default):
///
///   repositories:
///     "*":
///       security: [dana]
///     acme/app:
///       default: [alice, bob]
///       infra: [carol]
#[derive(Parser, Debug)]
#[command(name = "gh-rr")]
#[command(author, version, about, long_about, verbatim_doc_comment)]
pub struct Cli {
    /// Pull request number, branch or URL (defaults to the current branch).
    pub target: Option<String>,

    /// Repository in <owner>/<repository> format (defaults to the current repository).
    #[arg(short = 'R', long = "repo", value_name = "OWNER/REPO")]
    pub repo: Option<String>,

    /// Group of users to request review from.
    #[arg(short, long, value_name = "GROUP", default_value = DEFAULT_GROUP)]
    pub from: String,

    /// Use groups from the global ("*") repository entry.
    #[arg(short, long)]
    pub global: bool,

    /// Directory to search for the configuration file (defaults to your home directory).
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Show who would be requested without calling gh.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}
