//! Single-file analysis: read, prompt, review, conditionally persist.
//!
//! Every failure here is recovered locally. A file that disappears or
//! cannot be read between the event and the analysis is skipped with a
//! notice; a journal write failure is logged; neither stops the watcher.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::client::LlmClient;
use crate::journal::Journal;
use crate::models::{ReviewRequest, Scope, WatchFilter};
use crate::output;

/// Predicate deciding whether a review response is worth persisting.
///
/// Named and swappable so tests can stub the gate (the default is a
/// keyword heuristic, not a relevance guarantee).
pub type PersistGate = fn(&str) -> bool;

/// Default gate: the response mentions an issue or an improvement.
pub fn mentions_follow_up(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("issue") || lower.contains("improve")
}

/// Reviews one file at a time against the chat endpoint.
pub struct FileAnalyzer {
    client: Arc<LlmClient>,
    journal: Journal,
    filter: WatchFilter,
    root: PathBuf,
    gate: PersistGate,
}

impl FileAnalyzer {
    pub fn new(
        client: Arc<LlmClient>,
        journal: Journal,
        filter: WatchFilter,
        root: PathBuf,
    ) -> Self {
        Self {
            client,
            journal,
            filter,
            root,
            gate: mentions_follow_up,
        }
    }

    /// Replace the persistence gate (used by tests).
    pub fn with_gate(mut self, gate: PersistGate) -> Self {
        self.gate = gate;
        self
    }

    /// Analyze one file: print the review and journal it when the gate
    /// fires. Side-effecting; never fails the caller.
    pub async fn analyze(&self, path: &Path) {
        let scope = Scope::File(self.relative(path));

        // Re-check the size at analysis time; the file may have grown
        // since the watcher event was filtered.
        match tokio::fs::metadata(path).await {
            Ok(meta) if !self.filter.within_size(meta.len()) => {
                output::print_skip(
                    &scope,
                    &format!(
                        "{} bytes exceeds the {} byte limit",
                        meta.len(),
                        self.filter.max_file_bytes
                    ),
                );
                return;
            }
            Ok(_) => {}
            Err(e) => {
                output::print_skip(&scope, &format!("cannot stat file: {e}"));
                return;
            }
        }

        let content = match tokio::fs::read_to_string(path).await {
            Ok(c) => c,
            Err(e) => {
                output::print_skip(&scope, &format!("cannot read file: {e}"));
                return;
            }
        };

        let request = ReviewRequest::File {
            path: path.to_path_buf(),
            content,
        };
        let prompt = build_file_prompt(&scope, &request);

        let response = self.client.query(&prompt).await;
        output::print_review(&scope, &response.text);

        if response.succeeded && (self.gate)(&response.text) {
            if let Err(e) = self.journal.append(&scope, &response.text).await {
                output::print_warning(&format!("could not update improvements document: {e}"));
            }
        }
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

/// Build the fixed review prompt for one file.
fn build_file_prompt(scope: &Scope, request: &ReviewRequest) -> String {
    let content = match request {
        ReviewRequest::File { content, .. } => content.as_str(),
        ReviewRequest::Project { .. } => unreachable!("file prompt needs file content"),
    };

    format!(
        "You are a code quality manager reviewing a single file.\n\n\
        File: {scope}\n\n\
        Content:\n```\n{content}\n```\n\n\
        Respond with:\n\
        1. A short summary of what the file does.\n\
        2. Concrete improvement suggestions.\n\
        3. Any bugs or security concerns you can spot.\n\
        4. An overall quality assessment.\n"
    )
}
