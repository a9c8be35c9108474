//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. Environment variables
//! 2. `.lookout.toml` in the project root
//! 3. `~/.config/lookout/config.toml` (global defaults)
//! 4. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants;
use crate::env::Env;
use crate::models::WatchFilter;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub provider: ProviderConfig,
    pub filters: FiltersConfig,
    pub notes: NotesConfig,
}

/// Chat endpoint configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the chat-completion service.
    pub host: String,
    /// Model identifier passed in each request.
    pub model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum attempts per prompt (1 initial + retries).
    pub max_retries: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            host: constants::DEFAULT_HOST.to_string(),
            model: constants::DEFAULT_MODEL.to_string(),
            timeout_secs: 30,
            max_retries: 3,
        }
    }
}

/// File filter configuration for the two collection modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FiltersConfig {
    /// Filter used for watching and single-file analysis.
    pub analysis: WatchFilter,
    /// Filter used for project-wide review.
    pub project: WatchFilter,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            analysis: WatchFilter::analysis(),
            project: WatchFilter::project(),
        }
    }
}

/// Improvements document configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Path of the improvements document, relative to the project root.
    pub path: String,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            path: constants::NOTES_FILENAME.to_string(),
        }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, project-local config, then applies
    /// environment variable overrides.
    pub fn load(project_root: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 3: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 2: project-local config
        if let Some(root) = project_root {
            let local_path = root.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 1: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for
    /// non-default values).
    fn merge(&mut self, other: Config) {
        let default_provider = ProviderConfig::default();
        if other.provider.host != default_provider.host {
            self.provider.host = other.provider.host;
        }
        if other.provider.model != default_provider.model {
            self.provider.model = other.provider.model;
        }
        if other.provider.timeout_secs != default_provider.timeout_secs {
            self.provider.timeout_secs = other.provider.timeout_secs;
        }
        if other.provider.max_retries != default_provider.max_retries {
            self.provider.max_retries = other.provider.max_retries;
        }

        let default_filters = FiltersConfig::default();
        if other.filters.analysis.extensions != default_filters.analysis.extensions {
            self.filters.analysis.extensions = other.filters.analysis.extensions;
        }
        if other.filters.analysis.excludes != default_filters.analysis.excludes {
            self.filters.analysis.excludes = other.filters.analysis.excludes;
        }
        if other.filters.analysis.max_file_bytes != default_filters.analysis.max_file_bytes {
            self.filters.analysis.max_file_bytes = other.filters.analysis.max_file_bytes;
        }
        if other.filters.project.extensions != default_filters.project.extensions {
            self.filters.project.extensions = other.filters.project.extensions;
        }
        if other.filters.project.excludes != default_filters.project.excludes {
            self.filters.project.excludes = other.filters.project.excludes;
        }
        if other.filters.project.max_file_bytes != default_filters.project.max_file_bytes {
            self.filters.project.max_file_bytes = other.filters.project.max_file_bytes;
        }

        if other.notes.path != NotesConfig::default().path {
            self.notes.path = other.notes.path;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(constants::ENV_HOST) {
            self.provider.host = val;
        }
        if let Ok(val) = env.var(constants::ENV_MODEL) {
            self.provider.model = val;
        }
        if let Ok(val) = env.var(constants::ENV_NOTES) {
            self.notes.path = val;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.provider.host, "http://localhost:11434");
        assert_eq!(config.provider.model, "qwen3-coder:latest");
        assert_eq!(config.provider.timeout_secs, 30);
        assert_eq!(config.provider.max_retries, 3);
        assert_eq!(config.notes.path, "IMPROVEMENTS.md");
        assert!(config.filters.project.max_file_bytes < config.filters.analysis.max_file_bytes);
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[provider]
host = "http://192.168.178.55:11434"
model = "llama3:8b"
max_retries = 5

[notes]
path = "docs/REVIEWS.md"

[filters.analysis]
extensions = ["rs"]
max_file_bytes = 1024
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.host, "http://192.168.178.55:11434");
        assert_eq!(config.provider.model, "llama3:8b");
        assert_eq!(config.provider.max_retries, 5);
        assert_eq!(config.notes.path, "docs/REVIEWS.md");
        assert_eq!(config.filters.analysis.extensions, vec!["rs"]);
        assert_eq!(config.filters.analysis.max_file_bytes, 1024);
    }

    #[test]
    fn merge_overrides_non_default_values() {
        let mut base = Config::default();
        let mut other = Config::default();

        other.provider.host = "http://other:11434".to_string();
        other.provider.max_retries = 7;
        other.filters.analysis.excludes = vec!["generated".to_string()];
        other.notes.path = "NOTES.md".to_string();

        base.merge(other);

        assert_eq!(base.provider.host, "http://other:11434");
        assert_eq!(base.provider.max_retries, 7);
        assert_eq!(base.filters.analysis.excludes, vec!["generated"]);
        assert_eq!(base.notes.path, "NOTES.md");
        // Untouched fields keep defaults
        assert_eq!(base.provider.model, "qwen3-coder:latest");
    }

    #[test]
    fn merge_keeps_base_when_other_is_default() {
        let mut base = Config::default();
        base.provider.model = "llama3:8b".to_string();
        base.provider.timeout_secs = 60;

        base.merge(Config::default());

        assert_eq!(base.provider.model, "llama3:8b");
        assert_eq!(base.provider.timeout_secs, 60);
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let result = Config::load_file(&path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("parse"));
    }

    #[test]
    fn load_file_not_found() {
        let result = Config::load_file(Path::new("/tmp/lookout_not_exist_config.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("read"));
    }

    #[test]
    fn load_from_project_root() {
        let env = Env::mock(Vec::<(&str, &str)>::new());

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".lookout.toml"),
            r#"
[provider]
model = "llama3:8b"
"#,
        )
        .unwrap();

        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert_eq!(config.provider.model, "llama3:8b");
        assert_eq!(config.provider.host, "http://localhost:11434");
    }

    #[test]
    fn load_without_any_config_files() {
        let env = Env::mock(Vec::<(&str, &str)>::new());

        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert_eq!(config.provider.model, "qwen3-coder:latest");
    }

    #[test]
    fn apply_env_vars_host_and_model() {
        let env = Env::mock([
            ("LOOKOUT_HOST", "http://10.0.0.2:11434"),
            ("LOOKOUT_MODEL", "codellama:13b"),
        ]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.provider.host, "http://10.0.0.2:11434");
        assert_eq!(config.provider.model, "codellama:13b");
    }

    #[test]
    fn apply_env_vars_notes_path() {
        let env = Env::mock([("LOOKOUT_NOTES", "review-log.md")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.notes.path, "review-log.md");
    }

    #[test]
    fn env_overrides_local_config() {
        let env = Env::mock([("LOOKOUT_MODEL", "from-env")]);

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".lookout.toml"),
            r#"
[provider]
model = "from-file"
"#,
        )
        .unwrap();

        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert_eq!(config.provider.model, "from-env");
    }
}
