//! Shared types used across all modules.
//!
//! Defines the collector filter policy, review request shape, and the
//! scope tag used by the improvements journal. Other modules import from
//! here rather than reaching into each other's internals.

pub mod filter;

use std::fmt;
use std::path::PathBuf;

pub use filter::WatchFilter;

/// What a journal entry (or a review prompt) is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// A single file, identified by its path relative to the project root.
    File(String),
    /// The whole project.
    Project,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::File(path) => write!(f, "{path}"),
            Scope::Project => write!(f, "project-wide"),
        }
    }
}

/// Input for one review invocation.
///
/// Ephemeral: constructed per analysis call, turned into a prompt string,
/// and discarded.
#[derive(Debug, Clone)]
pub enum ReviewRequest {
    /// Review one file's content.
    File { path: PathBuf, content: String },
    /// Review the shape of the project from its file list.
    Project { files: Vec<String> },
}
