//! Clap argument types and validation.

use clap::Parser;
use std::path::PathBuf;

use lookout::constants;

/// LLM-backed code quality watcher.
#[derive(Parser, Debug)]
#[command(
    name = "lookout",
    version = constants::VERSION,
    about = "Watches a project and reviews changed files with a local LLM",
)]
pub struct Cli {
    /// With no subcommand, lookout starts watching the current directory.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Watch the project for changes and review each changed file (default).
    Watch(WatchArgs),

    /// Run a one-shot project-wide review, then exit.
    Scan(ScanArgs),
}

/// Arguments for the `watch` command.
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Project root directory to watch.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}

impl Default for WatchArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
        }
    }
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Project root directory to scan.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}
