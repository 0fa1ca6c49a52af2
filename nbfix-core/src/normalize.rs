//! Widget-state normalization
//!
//! Notebook front ends store interactive widget state under `metadata.widgets.state`.
//! Some tools write a `widgets` entry without `state`, or write something that is not a
//! mapping at all, and renderers then refuse the notebook. The normalizer walks the whole
//! document and repairs every metadata mapping it finds:
//!
//! | `metadata.widgets` before   | after                           |
//! |-----------------------------|---------------------------------|
//! | absent                      | absent                          |
//! | `{...}` without `state`     | `{..., "state": {}}`            |
//! | `{..., "state": x}`         | unchanged                       |
//! | anything else               | removed                         |
//!
//! The walk does not stop at a metadata mapping; it keeps descending into every value,
//! `metadata` included, so nested documents get the same treatment.

use serde_json::{Map, Value};
use tracing::debug;

pub const METADATA_KEY: &str = "metadata";
pub const WIDGETS_KEY: &str = "widgets";
pub const STATE_KEY: &str = "state";

/// Counts of what a normalization pass touched
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeStats {
    /// Metadata mappings visited
    pub metadata_nodes: usize,
    /// `widgets` mappings that received an empty `state`
    pub states_added: usize,
    /// Non-mapping `widgets` values that were dropped
    pub widgets_removed: usize,
}

impl NormalizeStats {
    pub fn changed(&self) -> bool {
        self.states_added > 0 || self.widgets_removed > 0
    }
}

/// Normalize every metadata mapping reachable from `root`, in place.
pub fn normalize_widgets(root: &mut Value) {
    WidgetsNormalizer::new().visit(root);
}

/// Recursive visitor behind [`normalize_widgets`] that also keeps [`NormalizeStats`]
#[derive(Debug, Default)]
pub struct WidgetsNormalizer {
    stats: NormalizeStats,
}

impl WidgetsNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visit a node and everything below it
    pub fn visit(&mut self, node: &mut Value) {
        match node {
            Value::Object(map) => {
                self.fix_metadata(map);
                for child in map.values_mut() {
                    self.visit(child);
                }
            }
            Value::Array(items) => {
                for item in items {
                    self.visit(item);
                }
            }
            _ => {}
        }
    }

    pub fn stats(&self) -> NormalizeStats {
        self.stats
    }

    pub fn finish(self) -> NormalizeStats {
        self.stats
    }

    fn fix_metadata(&mut self, node: &mut Map<String, Value>) {
        let Some(Value::Object(metadata)) = node.get_mut(METADATA_KEY) else {
            return;
        };
        self.stats.metadata_nodes += 1;

        match metadata.get_mut(WIDGETS_KEY) {
            None => {}
            Some(Value::Object(widgets)) => {
                if !widgets.contains_key(STATE_KEY) {
                    widgets.insert(STATE_KEY.to_string(), Value::Object(Map::new()));
                    self.stats.states_added += 1;
                    debug!("added empty widgets state");
                }
            }
            Some(other) => {
                debug!(kind = value_kind(other), "removing non-mapping widgets");
                // shift_remove keeps the order of the sibling keys
                metadata.shift_remove(WIDGETS_KEY);
                self.stats.widgets_removed += 1;
            }
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
