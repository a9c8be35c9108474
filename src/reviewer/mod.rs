//! Project-wide review: one prompt over the collected file list.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::client::LlmClient;
use crate::collector;
use crate::journal::Journal;
use crate::models::{ReviewRequest, Scope, WatchFilter};
use crate::output;

/// Errors that fail a one-shot scan.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("{0}")]
    Llm(String),
}

/// Runs a one-shot architecture review of the whole project.
pub struct ProjectReviewer {
    client: Arc<LlmClient>,
    journal: Journal,
    filter: WatchFilter,
    root: PathBuf,
}

impl ProjectReviewer {
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
        }
    }

    /// Collect the project file list, review it in one LLM call, print
    /// the result, and journal it under the project-wide section.
    ///
    /// An empty project is still reviewed: the prompt simply carries an
    /// empty file list. A terminal LLM failure fails the scan; a journal
    /// write failure is only logged.
    pub async fn review(&self) -> Result<(), ReviewError> {
        let files = collector::collect(&self.root, &self.filter);
        let relative = collector::relative_paths(&self.root, &files);

        output::print_status(&format!("reviewing {} file(s)", relative.len()));

        let request = ReviewRequest::Project { files: relative };
        let prompt = build_project_prompt(&request);

        let response = self.client.query(&prompt).await;
        if !response.succeeded {
            return Err(ReviewError::Llm(response.text));
        }

        output::print_review(&Scope::Project, &response.text);

        if let Err(e) = self.journal.append(&Scope::Project, &response.text).await {
            output::print_warning(&format!("could not update improvements document: {e}"));
        }

        Ok(())
    }
}

/// Build the fixed architecture-review prompt over the path list.
///
/// Only relative paths are embedded, never file contents.
fn build_project_prompt(request: &ReviewRequest) -> String {
    let files = match request {
        ReviewRequest::Project { files } => files,
        ReviewRequest::File { .. } => unreachable!("project prompt needs a file list"),
    };

    let listing = if files.is_empty() {
        "(no files collected)".to_string()
    } else {
        files.join("\n")
    };

    format!(
        "You are a code quality manager reviewing a project's structure.\n\n\
        Project files:\n{listing}\n\n\
        Based on the file layout above, respond with:\n\
        1. What kind of project this appears to be.\n\
        2. Observations about the architecture and organisation.\n\
        3. Structural improvements you would suggest.\n"
    )
}
