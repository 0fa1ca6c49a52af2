//! Error types for nbfix
//!
//! - `NotebookError`: loading, parsing and writing notebook files
//! - `PromptError`: reading answers for the deployment settings check

use std::path::PathBuf;

/// Errors raised while fixing a notebook file
#[derive(Debug, thiserror::Error)]
pub enum NotebookError {
    /// The input path does not exist. Reported before any read is attempted.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// IO error during file read
    #[error("io error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid JSON
    #[error("failed to parse {} as JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Nested at or past the parser's depth limit
    #[error(
        "failed to parse {} as JSON: nesting of {limit} levels or more is not supported",
        path.display()
    )]
    TooDeep { path: PathBuf, limit: usize },

    /// The document could not be serialized back to JSON
    #[error("failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// IO error during file write. The original file may already be truncated.
    #[error("io error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NotebookError {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Path of the notebook the error refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path }
            | Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::TooDeep { path, .. }
            | Self::Serialize { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}

/// Errors raised while prompting for a missing setting
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The user pressed Ctrl+C
    #[error("prompt interrupted")]
    Interrupted,

    /// Input closed before an answer was given
    #[error("input ended before an answer was given")]
    EndOfInput,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
