/*!
 * ASCII tree rendering of the project structure
 */

use crate::types::{PathEntry, TreeGroups};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Group entries by their parent relative path, preserving input order
pub fn group_by_parent(entries: &[PathEntry]) -> TreeGroups {
    let mut groups = TreeGroups::new();
    for entry in entries {
        groups
            .entry(entry.parent().to_string())
            .or_default()
            .push(entry.clone());
    }
    groups
}

/// Render the structure block for a root directory
///
/// The first line is `<root_name>/`; every entry follows with box-drawing
/// prefixes. `entries` are expected in the order produced by
/// [`crate::scanner::sort_entries`].
pub fn render_tree(root_name: &str, entries: &[PathEntry]) -> String {
    let groups = group_by_parent(entries);
    let mut lines = vec![format!("{}/", root_name)];
    render_group(&groups, "", "", &mut lines);
    lines.join("\n")
}

fn render_group(groups: &TreeGroups, parent: &str, prefix: &str, lines: &mut Vec<String>) {
    let Some(children) = groups.get(parent) else {
        return;
    };

    for (i, entry) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        let (branch, continuation) = if is_last {
            (LAST_BRANCH, SPACE)
        } else {
            (BRANCH, PIPE)
        };

        if entry.is_dir() {
            lines.push(format!("{}{}{}/", prefix, branch, entry.name));
            let child_prefix = format!("{}{}", prefix, continuation);
            render_group(groups, &entry.path, &child_prefix, lines);
        } else {
            lines.push(format!("{}{}{}", prefix, branch, entry.name));
        }
    }
}
