//! Tree rendering of a filtered directory structure.

use crate::error::ClipcatError;
use crate::filter::PathFilter;
use crate::options::ClipcatOptions;
use crate::types::{TreeLine, TreeRendering};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Builds the tree for `root`, which must be an existing directory.
///
/// Children are sorted by name and excluded directories are dropped before
/// connectors are assigned, so the `└── ` connector always lands on the last
/// surviving entry. Symlinked directories are descended.
///
/// # Errors
///
/// [`ClipcatError::InvalidRoot`] if `root` is not a directory, and
/// [`ClipcatError::Render`] if a symlink loops back onto one of its ancestors.
/// A directory that cannot be listed is rendered without children.
pub fn build_tree(
    root: impl AsRef<Path>,
    options: &ClipcatOptions,
) -> Result<TreeRendering, ClipcatError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(ClipcatError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Rendering tree for {}", root.display());
    let filter = PathFilter::from(options);
    let mut ancestors = Vec::new();
    let mut lines = Vec::new();
    push_children(root, "", &filter, &mut ancestors, &mut lines)?;
    Ok(TreeRendering {
        root: root.to_string_lossy().into_owned(),
        lines,
    })
}

/// Same as [`build_tree`], joined into the final newline-separated text.
pub fn render_tree(root: impl AsRef<Path>, options: &ClipcatOptions) -> Result<String, ClipcatError> {
    build_tree(root, options).map(|tree| tree.to_string())
}

fn push_children(
    dir: &Path,
    indent: &str,
    filter: &PathFilter,
    ancestors: &mut Vec<PathBuf>,
    lines: &mut Vec<TreeLine>,
) -> Result<(), ClipcatError> {
    let Ok(canonical) = fs::canonicalize(dir) else {
        return Ok(());
    };
    if ancestors.contains(&canonical) {
        return Err(ClipcatError::Render(format!(
            "symlink cycle at {}",
            dir.display()
        )));
    }
    ancestors.push(canonical);

    let children: Vec<(OsString, PathBuf)> = list_children(dir)
        .into_iter()
        .filter(|(_, path)| !(path.is_dir() && filter.should_exclude(path)))
        .collect();
    let count = children.len();
    for (i, (name, path)) in children.into_iter().enumerate() {
        let is_last = i + 1 == count;
        lines.push(TreeLine {
            indent: indent.to_string(),
            is_last,
            name: name.to_string_lossy().into_owned(),
        });
        if path.is_dir() {
            let child_indent = format!("{}{}", indent, if is_last { SPACE } else { PIPE });
            push_children(&path, &child_indent, filter, ancestors, lines)?;
        }
    }

    ancestors.pop();
    Ok(())
}

// Sorted by name; an unreadable directory yields no children.
fn list_children(dir: &Path) -> Vec<(OsString, PathBuf)> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_err) => {
            #[cfg(feature = "logging")]
            tracing::warn!("Cannot list {}: {}", dir.display(), _err);
            return Vec::new();
        }
    };
    let mut children: Vec<_> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| (entry.file_name(), entry.path()))
        .collect();
    children.sort_by(|a, b| a.0.cmp(&b.0));
    children
}
