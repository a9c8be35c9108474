//! Collector filter policy: which files participate in analysis.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default exclude patterns: build output, dependency trees, VCS metadata.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "node_modules",
    ".git",
    "target",
    "dist",
    "build",
    "vendor",
    "__pycache__",
    ".DS_Store",
];

/// Default extension allow-set for single-file analysis and watching.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "rs", "js", "jsx", "ts", "tsx", "py", "go", "java", "c", "h", "cpp", "cs", "rb", "php",
    "swift", "kt",
];

/// Broader allow-set for project-wide review (docs and config included).
pub const PROJECT_EXTENSIONS: &[&str] = &[
    "rs", "js", "jsx", "ts", "tsx", "py", "go", "java", "c", "h", "cpp", "cs", "rb", "php",
    "swift", "kt", "md", "json", "yaml", "yml", "toml", "html", "css", "sql", "sh",
];

/// Per-file size cap for single-file analysis (500KB).
pub const ANALYZE_MAX_BYTES: u64 = 500 * 1024;

/// Per-file size cap for project-wide collection (100KB).
pub const PROJECT_MAX_BYTES: u64 = 100 * 1024;

/// Combined include/exclude/size-limit policy for the collector and watcher.
///
/// Exclude patterns always take precedence over the extension allow-set:
/// a file under an excluded directory is never considered, whatever its
/// extension.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchFilter {
    /// Extension allow-set (lowercase, without the leading dot).
    pub extensions: Vec<String>,
    /// Path substrings that exclude a directory or file.
    pub excludes: Vec<String>,
    /// Files at or above this size are skipped.
    pub max_file_bytes: u64,
}

impl Default for WatchFilter {
    fn default() -> Self {
        Self::analysis()
    }
}

impl WatchFilter {
    /// Filter used for watching and single-file analysis.
    pub fn analysis() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            excludes: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            max_file_bytes: ANALYZE_MAX_BYTES,
        }
    }

    /// Filter used for project-wide review: broader extensions, smaller cap.
    pub fn project() -> Self {
        Self {
            extensions: PROJECT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            excludes: DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect(),
            max_file_bytes: PROJECT_MAX_BYTES,
        }
    }

    /// Returns `true` if any exclude pattern matches the path.
    ///
    /// Patterns are matched as substrings of the full path, so
    /// `node_modules` excludes every `node_modules` directory at any depth.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes.iter().any(|pat| path_str.contains(pat.as_str()))
    }

    /// Returns `true` if the file's extension is in the allow-set.
    pub fn has_allowed_extension(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => {
                let ext = ext.to_lowercase();
                self.extensions.iter().any(|e| e == &ext)
            }
            None => false,
        }
    }

    /// Returns `true` if a file of `size` bytes is within the cap.
    pub fn within_size(&self, size: u64) -> bool {
        size < self.max_file_bytes
    }

    /// Full file check: not excluded, allowed extension, within the cap.
    pub fn allows(&self, path: &Path, size: u64) -> bool {
        !self.is_excluded(path) && self.has_allowed_extension(path) && self.within_size(size)
    }
}
