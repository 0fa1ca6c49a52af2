//! Notebook document
//!
//! `NotebookDocument` owns the parsed JSON tree. It is built once from the file content,
//! mutated in place by the normalizer and serialized back out.
//!
//! Numbers are kept as the text they were read from (serde_json's `arbitrary_precision`),
//! so floats and integers wider than 64 bits come back out byte for byte.

use crate::normalize::{NormalizeStats, WidgetsNormalizer};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// serde_json's parse depth limit. Documents nested this deep or deeper are rejected.
pub const MAX_NESTING_DEPTH: usize = 128;

/// How a document is written back to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per nesting level
    pub indent_width: usize,
    /// Append a final `\n` after the closing bracket
    pub trailing_newline: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            trailing_newline: false,
        }
    }
}

/// A parsed notebook
#[derive(Debug, Clone, PartialEq)]
pub struct NotebookDocument {
    root: Value,
}

impl NotebookDocument {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Parse a notebook from its JSON text
    pub fn from_json_str(source: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(source)?))
    }

    /// Parse a notebook from raw file bytes. Invalid UTF-8 is a parse error.
    pub fn from_json_slice(source: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_slice(source)?))
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Value {
        &mut self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    /// Run the widgets normalizer over the whole document
    pub fn normalize_widgets(&mut self) -> NormalizeStats {
        let mut normalizer = WidgetsNormalizer::new();
        normalizer.visit(&mut self.root);
        normalizer.finish()
    }

    /// Serialize with pretty indentation. Non-ASCII text is written as-is, never escaped.
    pub fn to_json_string(&self, options: &WriteOptions) -> Result<String, serde_json::Error> {
        let indent = " ".repeat(options.indent_width);
        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut buf,
            PrettyFormatter::with_indent(indent.as_bytes()),
        );
        self.root.serialize(&mut serializer)?;
        if options.trailing_newline {
            buf.push(b'\n');
        }
        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl From<Value> for NotebookDocument {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}
