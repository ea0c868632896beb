use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Machine-readable classification of a [`ClipcatError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidRoot,
    ExcludedRoot,
    NoMatches,
    NoSelection,
    ReadFailure,
    RenderFailure,
}

#[derive(Debug, Error)]
pub enum ReadCause {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid UTF-8 sequence at byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },
    #[error("binary content cannot be decoded as text")]
    Binary,
}

#[derive(Debug, Error)]
pub enum ClipcatError {
    #[error("Invalid directory path: {}", .path.display())]
    InvalidRoot { path: PathBuf },
    #[error("Invalid file: {}", .path.display())]
    InvalidFile { path: PathBuf },
    #[error("Selected directory is a {name} folder. Nothing to process.")]
    ExcludedRoot { path: PathBuf, name: String },
    #[error("No files with the extension '{extension}' found.")]
    NoMatches { extension: String },
    #[error("No files selected.")]
    NoSelection,
    #[error("No valid files selected (files in {name} folders are ignored).")]
    NoValidFiles { name: String },
    #[error("Error reading {}: {cause}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        cause: ReadCause,
    },
    #[error("Error generating folder tree: {0}")]
    Render(String),
}

impl ClipcatError {
    pub(crate) fn read(path: impl Into<PathBuf>, cause: impl Into<ReadCause>) -> Self {
        ClipcatError::Read {
            path: path.into(),
            cause: cause.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClipcatError::InvalidRoot { .. } | ClipcatError::InvalidFile { .. } => {
                ErrorKind::InvalidRoot
            }
            ClipcatError::ExcludedRoot { .. } => ErrorKind::ExcludedRoot,
            ClipcatError::NoMatches { .. } => ErrorKind::NoMatches,
            ClipcatError::NoSelection | ClipcatError::NoValidFiles { .. } => {
                ErrorKind::NoSelection
            }
            ClipcatError::Read { .. } => ErrorKind::ReadFailure,
            ClipcatError::Render(_) => ErrorKind::RenderFailure,
        }
    }
}
