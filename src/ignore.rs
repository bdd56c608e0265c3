/*!
 * Ignore policy and content inclusion filter
 */

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;

/// Directory names that are never descended into
pub static IGNORED_DIRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Virtual environments and packaging internals
        ".venv",
        "venv",
        "site-packages",
        "Include",
        "Lib",
        "Scripts",
        "tcl",
        "Tools",
        "DLLs",
        "pyvenv.cfg",
        "share",
        "bin",
        "include",
        ".cfg",
        // Version control
        ".git",
        ".github",
        // Caches and build output
        "__pycache__",
        "dist",
        "build",
        // IDEs & Editors
        ".idea",
        ".qodo",
    ]
    .into_iter()
    .collect()
});

/// File extensions (lowercase, with leading dot) excluded from the contents block
pub static IGNORED_EXTENSIONS: &[&str] = &[".md"];

/// Extensions whose contents are copied into the report
pub static CONTENT_EXTENSIONS: &[&str] = &["py", "ts", "json"];

/// File names whose contents are copied regardless of extension
pub static CONTENT_FILE_NAMES: &[&str] = &["requirements.txt", ".env"];

/// Fixed rules deciding what the scanner visits and what the writer copies
#[derive(Debug, Clone, Default)]
pub struct IgnorePolicy {
    /// Name of the report file, excluded everywhere
    output_file_name: Option<String>,
}

impl IgnorePolicy {
    /// Create a policy that also excludes the given report file name
    pub fn new(output_file_name: impl Into<String>) -> Self {
        Self {
            output_file_name: Some(output_file_name.into()),
        }
    }

    /// Name of the excluded report file, if any
    pub fn output_file_name(&self) -> Option<&str> {
        self.output_file_name.as_deref()
    }

    /// Whether a directory with this name is pruned from traversal
    pub fn ignores_dir(&self, name: &str) -> bool {
        IGNORED_DIRS.contains(name)
    }

    /// Whether a file is the report itself
    pub fn is_output_file(&self, name: &str) -> bool {
        self.output_file_name.as_deref() == Some(name)
    }

    /// Whether a file carries an ignored extension (case-insensitive)
    pub fn has_ignored_extension(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        IGNORED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
    }

    /// Whether a file is listed in the structure block
    pub fn shows_in_structure(&self, name: &str) -> bool {
        !self.is_output_file(name)
    }

    /// Whether a file's contents are copied into the contents block
    pub fn includes_content(&self, name: &str) -> bool {
        if self.is_output_file(name) || self.has_ignored_extension(name) {
            return false;
        }

        if CONTENT_FILE_NAMES.contains(&name) {
            return true;
        }

        Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
    }
}
