/*!
 * Core types and data structures for codedump
 */

use std::collections::HashMap;
use std::path::PathBuf;

/// Kind of a filesystem entry shown in the structure block
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EntryKind {
    /// Directory containing other entries
    Directory,
    /// Regular file (or anything that is not a directory)
    File,
}

/// One filesystem object found by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    /// Path relative to the scan root, always `/`-separated
    pub path: String,
    /// Directory or file
    pub kind: EntryKind,
    /// Final path component
    pub name: String,
}

impl PathEntry {
    /// Create a new entry
    pub fn new(path: impl Into<String>, kind: EntryKind, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            name: name.into(),
        }
    }

    /// Number of `/` separators in the relative path
    pub fn depth(&self) -> usize {
        self.path.matches('/').count()
    }

    /// Relative path of the parent directory, empty for entries under the root
    pub fn parent(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[..idx],
            None => "",
        }
    }

    /// Whether this entry is a directory
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Parent relative path (empty string for the root) to its ordered children
pub type TreeGroups = HashMap<String, Vec<PathEntry>>;

/// A file whose content is copied into the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFile {
    /// Absolute or root-joined path used for reading
    pub path: PathBuf,
    /// Path shown in the `### File:` header, `/`-separated
    pub display_path: String,
}

/// Result of scanning a directory tree
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Entries for the structure block, globally sorted
    pub entries: Vec<PathEntry>,
    /// Files for the contents block, in traversal order
    pub content_files: Vec<ContentFile>,
}

impl ScanResult {
    /// Number of directories in the structure block
    pub fn directory_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_dir()).count()
    }

    /// Number of files in the structure block
    pub fn file_count(&self) -> usize {
        self.entries.len() - self.directory_count()
    }
}
