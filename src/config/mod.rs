//! Configuration loading and layering.
//!
//! Handles `.lookout.toml` loading, environment variable resolution,
//! and default merging with proper priority ordering.

pub mod loader;

pub use loader::{Config, ProviderConfig};
