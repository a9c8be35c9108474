//! Styled terminal output: review blocks and status lines.
//!
//! Reviews go to stdout; status and warnings go to stderr so piped
//! output stays clean.

use colored::Colorize;

use crate::models::Scope;

/// Print a review block with a scope header.
pub fn print_review(scope: &Scope, text: &str) {
    println!();
    println!("{}", format!("[{scope}]").bold().cyan());
    println!("{}", text.trim_end());
    println!();
}

/// Print a skip notice for a file that was not analyzed.
pub fn print_skip(scope: &Scope, reason: &str) {
    eprintln!(
        "  {} {}",
        format!("skipped {scope}:").yellow(),
        reason.dimmed()
    );
}

/// Print a dimmed status line.
pub fn print_status(message: &str) {
    eprintln!("  {}", message.dimmed());
}

/// Print a non-fatal warning.
pub fn print_warning(message: &str) {
    eprintln!("  {} {}", "warning:".yellow().bold(), message);
}
