/*!
 * Path normalization and project naming
 */

use std::env;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Characters that are not allowed in the derived project name
const INVALID_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Suffix appended to the project name to form the report file name
pub const OUTPUT_SUFFIX: &str = "_full_code.txt";

/// Normalize a user-supplied path without touching the filesystem
///
/// Expands a leading `~`, collapses repeated separators, removes `.` segments,
/// resolves `..` against a preceding segment and drops trailing separators.
/// Normalizing an already normalized path returns it unchanged.
pub fn normalize_path(input: &str) -> PathBuf {
    let expanded = shellexpand::tilde(input);
    lexical_normalize(Path::new(expanded.as_ref()))
}

/// Lexically normalize a path using the host separator convention
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    let mut has_root = false;
    // Number of trailing normal segments that a `..` may cancel
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => {
                normalized.push(Component::RootDir.as_os_str());
                has_root = true;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    normalized.pop();
                    depth -= 1;
                } else if !has_root {
                    normalized.push("..");
                }
            }
            Component::Normal(segment) => {
                normalized.push(segment);
                depth += 1;
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Absolute, lexically normalized form of `path`
///
/// Falls back to the relative form when the working directory is unavailable.
pub fn absolute_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return lexical_normalize(path);
    }
    match env::current_dir() {
        Ok(cwd) => lexical_normalize(&cwd.join(path)),
        Err(_) => lexical_normalize(path),
    }
}

/// Make a raw name filesystem safe
///
/// Each of `< > : " / \ | ? *` becomes `_` and whitespace runs collapse into
/// a single `_`. Leading and trailing whitespace is dropped.
pub fn sanitize_name(raw: &str) -> String {
    let replaced: String = raw
        .chars()
        .map(|c| if INVALID_NAME_CHARS.contains(&c) { '_' } else { c })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Derive the project name from the final component of a directory path
pub fn project_name(path: &Path) -> String {
    let absolute = absolute_path(path);
    let base = absolute
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    sanitize_name(&base)
}

/// Name of the report file for a project
pub fn output_file_name(project_name: &str) -> String {
    format!("{}{}", project_name, OUTPUT_SUFFIX)
}

/// Full path of the report file, placed inside the project directory itself
pub fn output_path(project_dir: &Path) -> PathBuf {
    let file_name = output_file_name(&project_name(project_dir));
    lexical_normalize(&project_dir.join(file_name))
}

/// Render a path with forward slashes regardless of host convention
pub fn display_path(path: &Path) -> String {
    let rendered = path.to_string_lossy();
    if MAIN_SEPARATOR == '/' {
        rendered.into_owned()
    } else {
        rendered.replace(MAIN_SEPARATOR, "/")
    }
}
