//! Recursive project file collection.
//!
//! Walks the tree under a root directory, pruning excluded directories
//! before descent and keeping files that pass the extension and size
//! checks of a [`WatchFilter`].

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::models::WatchFilter;
use crate::output;

/// Collect the files under `root` that pass `filter`, in traversal order.
///
/// Excluded directories are pruned before descent, so nothing inside
/// them is ever visited. A directory that cannot be read is skipped with
/// a warning and the rest of the scan continues.
pub fn collect(root: &Path, filter: &WatchFilter) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.path() == root || !filter.is_excluded(entry.path()));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                output::print_status(&format!("skipping unreadable entry: {e}"));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let size = match entry.metadata() {
            Ok(m) => m.len(),
            Err(_) => continue,
        };

        if filter.has_allowed_extension(entry.path()) && filter.within_size(size) {
            files.push(entry.path().to_path_buf());
        }
    }

    files
}

/// Render collected paths relative to `root`, for prompts and journal
/// scopes. Paths outside `root` fall back to their full display form.
pub fn relative_paths(root: &Path, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|f| {
            f.strip_prefix(root)
                .unwrap_or(f)
                .display()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::filter::ANALYZE_MAX_BYTES;

    fn write(dir: &Path, rel: &str, bytes: usize) {
        let path = dir.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, vec![b'x'; bytes]).unwrap();
    }

    #[test]
    fn excluded_directories_are_never_descended() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "src/a.js", 200);
        write(dir.path(), "node_modules/x.js", 200);
        write(dir.path(), "node_modules/deep/y.js", 200);

        let files = collect(dir.path(), &WatchFilter::analysis());
        let rel = relative_paths(dir.path(), &files);
        assert_eq!(rel, vec!["src/a.js"]);
    }

    #[test]
    fn size_cap_and_exclude_combined() {
        // /src/a.js (200B), /node_modules/x.js (200B), /src/big.md (600KB),
        // cap 500KB, exclude node_modules -> exactly src/a.js
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "src/a.js", 200);
        write(dir.path(), "node_modules/x.js", 200);
        write(dir.path(), "src/big.md", 600 * 1024);

        let filter = WatchFilter {
            extensions: vec!["js".to_string(), "md".to_string()],
            excludes: vec!["node_modules".to_string()],
            max_file_bytes: ANALYZE_MAX_BYTES,
        };

        let files = collect(dir.path(), &filter);
        let rel = relative_paths(dir.path(), &files);
        assert_eq!(rel, vec!["src/a.js"]);
    }

    #[test]
    fn oversized_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "small.rs", 100);
        write(dir.path(), "exact.rs", ANALYZE_MAX_BYTES as usize);

        let files = collect(dir.path(), &WatchFilter::analysis());
        let rel = relative_paths(dir.path(), &files);
        // The cap is strict: a file of exactly max_file_bytes is out
        assert_eq!(rel, vec!["small.rs"]);
    }

    #[test]
    fn disallowed_extensions_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "code.rs", 10);
        write(dir.path(), "image.png", 10);
        write(dir.path(), "noext", 10);

        let files = collect(dir.path(), &WatchFilter::analysis());
        let rel = relative_paths(dir.path(), &files);
        assert_eq!(rel, vec!["code.rs"]);
    }

    #[test]
    fn empty_root_collects_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let files = collect(dir.path(), &WatchFilter::project());
        assert!(files.is_empty());
    }

    #[test]
    fn missing_root_collects_nothing() {
        let files = collect(
            Path::new("/tmp/lookout_does_not_exist_12345"),
            &WatchFilter::analysis(),
        );
        assert!(files.is_empty());
    }
}
