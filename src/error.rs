//! Data-integrity errors.
//!
//! The query and cascade APIs are total: missing nodes, parents, or children
//! degrade to empty results rather than errors. `TreeError` exists only for
//! the opt-in [`check_integrity`](crate::domain::tree_operations::check_integrity)
//! pass, which turns silently broken source data into a reportable condition.

use std::fmt::Debug;
use thiserror::Error;

/// Structural defects in a flat row collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError<Id: Debug> {
    /// A row's ancestor chain revisits an identifier, so `parent_id`
    /// references form a loop.
    #[error("parent chain starting at row {id:?} contains a cycle")]
    CycleDetected {
        /// Row whose ancestor walk first revisited an identifier.
        id: Id,
    },

    /// Two rows in the collection share an identifier. Traversal assumes
    /// identifier uniqueness and would double-count such rows.
    #[error("duplicate row identifier {id:?}")]
    DuplicateId {
        /// The identifier that appears more than once.
        id: Id,
    },
}
