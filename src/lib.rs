//! lookout — LLM-backed code quality watcher (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod analyzer;
pub mod client;
pub mod collector;
pub mod config;
pub mod constants;
pub mod env;
pub mod journal;
pub mod models;
pub mod output;
pub mod reviewer;
pub mod watcher;
