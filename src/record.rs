//! Concrete row record backed by serde.
//!
//! Library code stays generic over [`Row`]; `TreeRow` is the ready-made
//! implementation for callers whose flat row lists arrive as JSON, and the
//! record type the demo binary and tests use.

use crate::traits::Row;
use serde::{Deserialize, Serialize};

/// A flat-list tree row with numeric identifiers.
///
/// `parent_id`, `expanded` and `leaf` all default when absent from the
/// source document, so a minimal row only needs `id`, `level` and `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRow {
    /// Unique row identifier.
    pub id: u64,
    /// Identifier of the logical parent; `None` for roots.
    #[serde(default)]
    pub parent_id: Option<u64>,
    /// Nesting depth, `1` = root.
    pub level: u32,
    /// Expansion flag; collapsed by default.
    #[serde(default)]
    pub expanded: bool,
    /// Advisory leaf flag from the data source.
    #[serde(default)]
    pub leaf: bool,
    /// Display title.
    #[serde(default)]
    pub title: String,
}

impl Row for TreeRow {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn parent_id(&self) -> Option<u64> {
        self.parent_id
    }

    fn level(&self) -> u32 {
        self.level
    }

    fn is_expanded(&self) -> bool {
        self.expanded
    }

    fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    fn is_leaf(&self) -> bool {
        self.leaf
    }
}
