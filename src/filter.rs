//! Directory exclusion rules shared by every traversal mode.

use crate::options::ClipcatOptions;
use std::path::{Component, Path, PathBuf};

/// Name of the version-control metadata directory that is never traversed.
pub const METADATA_DIR: &str = ".git";
/// A directory directly containing a file with this name is skipped entirely.
pub const IGNORE_MARKER: &str = ".gitignore";

/// Decides whether a directory (and its whole subtree) is left out of a traversal.
///
/// Only direct children are inspected for the marker; the marker's contents
/// are never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathFilter {
    metadata_dir: String,
    ignore_marker: String,
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::new(METADATA_DIR, IGNORE_MARKER)
    }
}

impl From<&ClipcatOptions> for PathFilter {
    fn from(options: &ClipcatOptions) -> Self {
        Self::new(options.metadata_dir.clone(), options.ignore_marker.clone())
    }
}

impl PathFilter {
    pub fn new(metadata_dir: impl Into<String>, ignore_marker: impl Into<String>) -> Self {
        Self {
            metadata_dir: metadata_dir.into(),
            ignore_marker: ignore_marker.into(),
        }
    }

    pub fn metadata_dir(&self) -> &str {
        &self.metadata_dir
    }

    /// Returns `true` when `dir` is the metadata directory or directly holds
    /// the ignore marker. Callers only pass directory entries.
    pub fn should_exclude(&self, dir: &Path) -> bool {
        self.is_metadata_dir(dir) || dir.join(&self.ignore_marker).exists()
    }

    /// Exact, case-sensitive match on the base name.
    pub fn is_metadata_dir(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name == self.metadata_dir.as_str())
    }

    /// Whether any segment of `path` is the metadata directory.
    pub fn is_inside_metadata_dir(&self, path: &Path) -> bool {
        path.components().any(|component| {
            matches!(component, Component::Normal(segment) if segment == self.metadata_dir.as_str())
        })
    }
}

/// Folds `.` and `..` segments without touching the filesystem, so
/// `proj/.git/sub/..` reads as `proj/.git`. Symlinks are not resolved.
pub(crate) fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let last = out.components().next_back();
                let at_root = matches!(last, Some(Component::RootDir | Component::Prefix(_)));
                let after_name = matches!(last, Some(Component::Normal(_)));
                if after_name {
                    out.pop();
                } else if !at_root {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
