//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use std::io::Write;
use std::path::Path;

use colored::Colorize;

/// Print the watch-mode startup banner to stderr.
pub fn print_banner(root: &Path, model: &str, host: &str) {
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = writeln!(handle);
    let _ = writeln!(
        handle,
        "  {} {}",
        "lookout".bold(),
        format!("· watching {} for changes", root.display()).dimmed(),
    );
    let _ = writeln!(
        handle,
        "  {}",
        format!("model {model} at {host}").dimmed(),
    );
    let _ = writeln!(handle);
    let _ = handle.flush();
}
