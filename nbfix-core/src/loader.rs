//! Notebook file loading
//!
//! `NotebookFile` ties a parsed document to the path it came from, so it can be written
//! back to the same place. Writing overwrites the original directly: there is no backup
//! and no write-to-temp-then-rename step, so a failed write can leave a truncated file.
//!
//! # Example
//!
//! ```rust
//! use nbfix_core::{NotebookFile, WriteOptions};
//!
//! let mut file = NotebookFile::open("analysis.ipynb")?;
//! let stats = file.document_mut().normalize_widgets();
//! file.save(&WriteOptions::default())?;
//! ```

use crate::document::{NotebookDocument, WriteOptions, MAX_NESTING_DEPTH};
use crate::error::NotebookError;
use crate::normalize::NormalizeStats;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A notebook document together with its source path
#[derive(Debug, Clone)]
pub struct NotebookFile {
    path: PathBuf,
    document: NotebookDocument,
}

impl NotebookFile {
    /// Read and parse a notebook.
    ///
    /// A missing path is reported as [`NotebookError::NotFound`] before anything is read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, NotebookError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(NotebookError::not_found(path));
        }

        let source = fs::read(path).map_err(|source| NotebookError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "read notebook");

        let document = NotebookDocument::from_json_slice(&source)
            .map_err(|source| parse_error(path, source))?;

        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &NotebookDocument {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut NotebookDocument {
        &mut self.document
    }

    pub fn into_document(self) -> NotebookDocument {
        self.document
    }

    /// Serialize the document and overwrite the source path
    pub fn save(&self, options: &WriteOptions) -> Result<(), NotebookError> {
        let contents =
            self.document
                .to_json_string(options)
                .map_err(|source| NotebookError::Serialize {
                    path: self.path.clone(),
                    source,
                })?;
        fs::write(&self.path, &contents).map_err(|source| NotebookError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), bytes = contents.len(), "wrote notebook");
        Ok(())
    }
}

/// serde_json reports its depth limit as a syntax error; pull it out so the message says so
fn parse_error(path: &Path, source: serde_json::Error) -> NotebookError {
    if source.to_string().starts_with("recursion limit exceeded") {
        NotebookError::TooDeep {
            path: path.to_path_buf(),
            limit: MAX_NESTING_DEPTH,
        }
    } else {
        NotebookError::Parse {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Open a notebook, normalize its widgets metadata and write it back in place
pub fn fix_notebook(
    path: impl AsRef<Path>,
    options: &WriteOptions,
) -> Result<NormalizeStats, NotebookError> {
    let mut file = NotebookFile::open(path)?;
    let stats = file.document_mut().normalize_widgets();
    file.save(options)?;
    info!(
        path = %file.path().display(),
        metadata_nodes = stats.metadata_nodes,
        states_added = stats.states_added,
        widgets_removed = stats.widgets_removed,
        "fixed notebook widgets"
    );
    Ok(stats)
}
