//! The improvements document: a single markdown file accumulating
//! review entries.
//!
//! Entries are inserted under per-scope section markers via a whole-file
//! read-modify-write. The write is not atomic and there is no lock, so
//! two overlapping analyses can race; the last writer wins. Appends are
//! not deduplicating: identical entries produce identical sections.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::models::Scope;

/// Marker under which file-level entries are inserted.
const FILE_SECTION_MARKER: &str = "<!-- lookout:file-reviews -->";

/// Marker under which project-wide entries are inserted.
const PROJECT_SECTION_MARKER: &str = "<!-- lookout:project-reviews -->";

/// Skeleton written when the document does not exist yet.
const SKELETON: &str = "# Improvement Log\n\n\
    Review notes collected by lookout. Newest entries first within each\n\
    section.\n\n\
    ## File Reviews\n\n\
    <!-- lookout:file-reviews -->\n\n\
    ## Project Reviews\n\n\
    <!-- lookout:project-reviews -->\n";

/// Errors while reading or writing the document.
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Handle on the improvements document.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an entry for `scope` dated today.
    pub async fn append(&self, scope: &Scope, body: &str) -> Result<(), JournalError> {
        self.append_dated(scope, body, Local::now().date_naive())
            .await
    }

    /// Append an entry with an explicit date (separated out for tests).
    pub async fn append_dated(
        &self,
        scope: &Scope,
        body: &str,
        date: NaiveDate,
    ) -> Result<(), JournalError> {
        let current = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => SKELETON.to_string(),
            Err(e) => {
                return Err(JournalError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        let entry = format_entry(scope, body, date);
        let updated = insert_entry(&current, scope, &entry);

        tokio::fs::write(&self.path, updated)
            .await
            .map_err(|e| JournalError::Write {
                path: self.path.clone(),
                source: e,
            })
    }
}

/// Render one entry: a dated heading followed by the body.
fn format_entry(scope: &Scope, body: &str, date: NaiveDate) -> String {
    format!(
        "### {} · {}\n\n{}\n",
        date.format("%Y-%m-%d"),
        scope,
        body.trim_end()
    )
}

/// Insert `entry` after the section marker for `scope`.
///
/// New entries land directly below the marker, so each section reads
/// newest-first. A document without the marker gets the entry appended
/// at the end instead.
fn insert_entry(document: &str, scope: &Scope, entry: &str) -> String {
    let marker = match scope {
        Scope::File(_) => FILE_SECTION_MARKER,
        Scope::Project => PROJECT_SECTION_MARKER,
    };

    match document.find(marker) {
        Some(pos) => {
            let after_marker = pos + marker.len();
            let mut updated = String::with_capacity(document.len() + entry.len() + 2);
            updated.push_str(&document[..after_marker]);
            updated.push_str("\n\n");
            updated.push_str(entry);
            updated.push('\n');
            updated.push_str(document[after_marker..].trim_start_matches('\n'));
            updated
        }
        None => {
            let mut updated = document.to_string();
            if !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push('\n');
            updated.push_str(entry);
            updated
        }
    }
}
