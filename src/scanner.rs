/*!
 * Filtered directory traversal
 */

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::ignore::IgnorePolicy;
use crate::paths::display_path;
use crate::types::{ContentFile, EntryKind, PathEntry, ScanResult};

/// Scanner for directory contents
pub struct Scanner {
    /// Directory being scanned
    root: PathBuf,
    /// Rules for pruning directories and selecting files
    policy: IgnorePolicy,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(root: impl Into<PathBuf>, policy: IgnorePolicy) -> Self {
        Self {
            root: root.into(),
            policy,
        }
    }

    /// Root directory of the scan
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the root directory once, collecting structure entries and content files
    ///
    /// Ignored directories are pruned before descent. Within each directory
    /// files are visited before subdirectories, both in name order, so the
    /// content file list is deterministic. Entries that cannot be read are
    /// logged and skipped.
    pub fn scan(&self) -> ScanResult {
        let mut result = ScanResult::default();

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .sort_by(files_then_dirs)
            .into_iter()
            .filter_entry(|e| !(is_dir(e) && self.policy.ignores_dir(&name_of(e))));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let name = name_of(&entry);
            let rel_path = self.relative_path(entry.path());

            if is_dir(&entry) {
                result
                    .entries
                    .push(PathEntry::new(rel_path, EntryKind::Directory, name));
                continue;
            }

            if !self.policy.shows_in_structure(&name) {
                debug!("Excluding report file {}", entry.path().display());
                continue;
            }

            if self.policy.includes_content(&name) {
                result.content_files.push(ContentFile {
                    path: entry.path().to_path_buf(),
                    display_path: display_path(entry.path()),
                });
            }
            result
                .entries
                .push(PathEntry::new(rel_path, EntryKind::File, name));
        }

        sort_entries(&mut result.entries);

        debug!(
            "Scanned {}: {} entries, {} content files",
            self.root.display(),
            result.entries.len(),
            result.content_files.len()
        );

        result
    }

    /// Path of `path` relative to the scan root, `/`-separated
    fn relative_path(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        display_path(rel)
    }
}

/// Order entries by depth, then path, then directories before files
pub fn sort_entries(entries: &mut [PathEntry]) {
    entries.sort_by(|a, b| {
        a.depth()
            .cmp(&b.depth())
            .then_with(|| a.path.cmp(&b.path))
            .then_with(|| a.kind.cmp(&b.kind))
    });
}

/// Directory entries count as directories even when reached through a symlink
fn is_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}

fn name_of(entry: &DirEntry) -> String {
    entry.file_name().to_string_lossy().to_string()
}

fn files_then_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    is_dir(a)
        .cmp(&is_dir(b))
        .then_with(|| a.file_name().cmp(b.file_name()))
}
