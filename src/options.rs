use crate::filter::{IGNORE_MARKER, METADATA_DIR};
use serde::{Deserialize, Serialize};

/// Extensions offered to users picking a filter. Any other suffix works too.
pub const SUGGESTED_EXTENSIONS: &[&str] = &[".HTML", ".PHP", ".css", ".tsx", ".js", ".py", ".dart"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipcatOptions {
    pub metadata_dir: String,
    pub ignore_marker: String,
    /// Visit collect-mode entries in file-name order instead of listing order.
    pub sort_entries: bool,
    /// Descend into symlinked directories while collecting.
    pub follow_links: bool,
}

impl Default for ClipcatOptions {
    fn default() -> Self {
        Self {
            metadata_dir: METADATA_DIR.to_string(),
            ignore_marker: IGNORE_MARKER.to_string(),
            sort_entries: false,
            follow_links: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct ClipcatBuilder {
    options: ClipcatOptions,
}

impl ClipcatBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn metadata_dir(mut self, name: impl Into<String>) -> Self {
        self.options.metadata_dir = name.into();
        self
    }
    pub fn ignore_marker(mut self, name: impl Into<String>) -> Self {
        self.options.ignore_marker = name.into();
        self
    }
    pub fn sort_entries(mut self, yes: bool) -> Self {
        self.options.sort_entries = yes;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> ClipcatOptions {
        self.options
    }
}
