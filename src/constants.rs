//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and endpoint defaults so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "lookout";

/// Crate version, for `--version` output.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.lookout.toml` in the project root).
pub const CONFIG_FILENAME: &str = ".lookout.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "lookout";

/// Default improvements document filename, relative to the project root.
pub const NOTES_FILENAME: &str = "IMPROVEMENTS.md";

/// Default chat endpoint base URL (Ollama's local default).
pub const DEFAULT_HOST: &str = "http://localhost:11434";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "qwen3-coder:latest";


// ── Environment variable names ──────────────────────────────────────

pub const ENV_HOST: &str = "LOOKOUT_HOST";
pub const ENV_MODEL: &str = "LOOKOUT_MODEL";
pub const ENV_NOTES: &str = "LOOKOUT_NOTES";
