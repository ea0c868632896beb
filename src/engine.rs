use crate::error::{ClipcatError, ReadCause};
use crate::filter::{PathFilter, normalize_lexically};
use crate::options::ClipcatOptions;
use crate::tree::render_tree;
use crate::types::{AggregatedResult, FileRecord, TraversalRequest};
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path, filter: &PathFilter, options: &ClipcatOptions) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links);
        // Files of a directory come before its subdirectories.
        if options.sort_entries {
            builder.sort_by_file_path(|a, b| {
                (a.is_dir(), a.file_name()).cmp(&(b.is_dir(), b.file_name()))
            });
        } else {
            builder.sort_by_file_path(|a, b| a.is_dir().cmp(&b.is_dir()));
        }
        let filter = filter.clone();
        builder.filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if is_dir && filter.should_exclude(entry.path()) {
                #[cfg(feature = "logging")]
                tracing::debug!("Pruning excluded directory: {}", entry.path().display());
                return false;
            }
            true
        });
        Self {
            inner: builder.build(),
        }
    }
    fn files(self) -> impl Iterator<Item = PathBuf> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if is_candidate(&entry) => Some(entry.into_path()),
            Ok(_) => None,
            Err(_err) => {
                #[cfg(feature = "logging")]
                tracing::warn!("Skipping unreadable entry: {}", _err);
                None
            }
        })
    }
}
// Anything that is not a directory, dangling links included; reading decides.
fn is_candidate(entry: &DirEntry) -> bool {
    if entry.file_type().is_some_and(|t| t.is_dir()) {
        return false;
    }
    !(entry.path_is_symlink() && entry.path().is_dir())
}
fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}
fn read_text(path: &Path) -> Result<String, ClipcatError> {
    let bytes = fs::read(path).map_err(|e| ClipcatError::read(path, e))?;
    let content = String::from_utf8(bytes).map_err(|e| {
        let cause = if content_inspector::inspect(e.as_bytes()).is_binary() {
            ReadCause::Binary
        } else {
            ReadCause::InvalidUtf8 {
                valid_up_to: e.utf8_error().valid_up_to(),
            }
        };
        #[cfg(feature = "logging")]
        tracing::warn!("Failed to decode {}: {}", path.display(), cause);
        ClipcatError::read(path, cause)
    })?;
    Ok(normalize_newlines(content))
}
fn read_record(path: &Path) -> Result<FileRecord, ClipcatError> {
    Ok(FileRecord {
        name: base_name(path),
        path: path.to_path_buf(),
        content: read_text(path)?,
    })
}
/// Walks `root` depth-first and concatenates every file whose name ends with
/// `extension`, compared case-insensitively.
///
/// Directories named like the metadata directory, or holding the ignore
/// marker, are pruned before they are entered. The first unreadable match
/// aborts the whole call.
pub fn collect_by_extension(
    root: impl AsRef<Path>,
    extension: &str,
    options: &ClipcatOptions,
) -> Result<AggregatedResult, ClipcatError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(ClipcatError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }
    let filter = PathFilter::from(options);
    if filter.is_metadata_dir(&normalize_lexically(root)) {
        return Err(ClipcatError::ExcludedRoot {
            path: root.to_path_buf(),
            name: filter.metadata_dir().to_string(),
        });
    }
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Collecting '{}' files under {}",
        extension,
        root.display()
    );
    let suffix = extension.to_lowercase();
    let mut records = Vec::new();
    for path in Walker::new(root, &filter, options).files() {
        if !base_name(&path).to_lowercase().ends_with(&suffix) {
            continue;
        }
        records.push(read_record(&path)?);
    }
    if records.is_empty() {
        return Err(ClipcatError::NoMatches {
            extension: extension.to_string(),
        });
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Collected {} files", records.len());
    Ok(AggregatedResult { records })
}
/// Concatenates the given files in order.
///
/// Paths with a metadata-directory segment are dropped first; every remaining
/// path must be an existing regular file.
pub fn collect_explicit<P: AsRef<Path>>(
    paths: &[P],
    options: &ClipcatOptions,
) -> Result<AggregatedResult, ClipcatError> {
    if paths.is_empty() {
        return Err(ClipcatError::NoSelection);
    }
    let filter = PathFilter::from(options);
    let valid: Vec<&Path> = paths
        .iter()
        .map(AsRef::as_ref)
        .filter(|path| !filter.is_inside_metadata_dir(path))
        .collect();
    if valid.is_empty() {
        return Err(ClipcatError::NoValidFiles {
            name: filter.metadata_dir().to_string(),
        });
    }
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Collecting {} of {} selected files",
        valid.len(),
        paths.len()
    );
    let mut records = Vec::with_capacity(valid.len());
    for path in valid {
        if !path.is_file() {
            return Err(ClipcatError::InvalidFile {
                path: path.to_path_buf(),
            });
        }
        records.push(read_record(path)?);
    }
    Ok(AggregatedResult { records })
}
/// Executes a request and returns the text handed back to the shell.
pub fn run(request: &TraversalRequest, options: &ClipcatOptions) -> Result<String, ClipcatError> {
    match request {
        TraversalRequest::CollectByExtension { root, extension } => {
            collect_by_extension(root, extension, options).map(|result| result.render())
        }
        TraversalRequest::RenderTree { root } => render_tree(root, options),
        TraversalRequest::CollectExplicitFiles { paths } => {
            collect_explicit(paths, options).map(|result| result.render())
        }
    }
}
