use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";

/// What the caller wants produced, with the inputs that mode needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TraversalRequest {
    /// Concatenate every file under `root` whose name ends with `extension`
    /// (case-insensitive, literal suffix).
    CollectByExtension { root: PathBuf, extension: String },
    /// Render the filtered structure of `root` as connector lines.
    RenderTree { root: PathBuf },
    /// Concatenate exactly these files, in the given order.
    CollectExplicitFiles { paths: Vec<PathBuf> },
}

impl TraversalRequest {
    pub fn collect(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        TraversalRequest::CollectByExtension {
            root: root.into(),
            extension: extension.into(),
        }
    }

    pub fn tree(root: impl Into<PathBuf>) -> Self {
        TraversalRequest::RenderTree { root: root.into() }
    }

    pub fn files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        TraversalRequest::CollectExplicitFiles {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

/// A single collected file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Base name of the file; this is what appears in the aggregate.
    pub name: String,
    /// Full path the content was read from.
    pub path: PathBuf,
    /// Decoded text with line endings normalized to `\n`.
    pub content: String,
}

/// Collected files in traversal order.
///
/// Rendered as `name\ncontent\n` per record, records separated by one
/// newline (so a blank line sits between entries).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedResult {
    pub records: Vec<FileRecord>,
}

impl AggregatedResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AggregatedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}\n{}\n", record.name, record.content)?;
        }
        Ok(())
    }
}

/// One non-root line of a tree rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeLine {
    /// Continuation tokens inherited from every ancestor level.
    pub indent: String,
    /// Whether this entry is the last surviving sibling at its level.
    pub is_last: bool,
    pub name: String,
}

impl TreeLine {
    pub fn connector(&self) -> &'static str {
        if self.is_last { LAST_BRANCH } else { BRANCH }
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.indent, self.connector(), self.name)
    }
}

/// A rendered directory tree: the root path as given, then one line per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRendering {
    pub root: String,
    pub lines: Vec<TreeLine>,
}

impl fmt::Display for TreeRendering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)?;
        for line in &self.lines {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}
