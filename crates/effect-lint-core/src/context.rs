//! Context types for rule execution.

use std::path::{Path, PathBuf};

/// Context provided to per-call-site rules.
///
/// Contains metadata about the file being analyzed that rules can use
/// to make context-aware decisions (e.g., skip checks in test files).
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Whether this file is detected as a test file.
    pub is_test: bool,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let is_test = Self::detect_test_file(path);
        let relative_path = path
            .strip_prefix(root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            is_test,
            relative_path,
        }
    }

    /// Detects if a file is a test file based on JavaScript conventions.
    fn detect_test_file(path: &Path) -> bool {
        for component in path.components() {
            if let std::path::Component::Normal(s) = component {
                let s = s.to_string_lossy();
                if s == "__tests__" || s == "__mocks__" {
                    return true;
                }
            }
        }

        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            let stem = file_name
                .trim_end_matches(".js")
                .trim_end_matches(".jsx")
                .trim_end_matches(".mjs")
                .trim_end_matches(".cjs");
            if stem.ends_with(".test") || stem.ends_with(".spec") {
                return true;
            }
        }

        false
    }

}
