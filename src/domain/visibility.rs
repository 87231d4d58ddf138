//! Row visibility under expand/collapse state.
//!
//! A row is rendered only while every ancestor up to a root is expanded;
//! collapsing one ancestor hides the whole subtree below it. Visibility is
//! recomputed from the ancestor chain on every query — collapsing a node
//! pushes nothing down to its descendants.

use crate::domain::tree_operations::parent;
use crate::traits::Row;
use std::collections::HashSet;
use tracing::debug;

/// Returns whether a row should currently be rendered.
///
/// Roots (`level == 1`) are always visible. Any other row is visible only
/// if its parent resolves, is expanded, and is itself visible. A non-root
/// whose parent cannot be resolved is never shown, and a cyclic parent
/// chain yields `false` once the walk revisits an identifier.
///
/// # Arguments
/// * `rows` - The flat row collection
/// * `node` - The row to test, or `None` for `false`
pub fn is_show<R: Row>(rows: &[R], node: Option<&R>) -> bool {
    let Some(node) = node else {
        return false;
    };

    let mut visited: HashSet<R::Id> = HashSet::new();
    visited.insert(node.id());

    let mut current = node;
    loop {
        if current.level() == 1 {
            return true;
        }
        let Some(ancestor) = parent(rows, Some(current)) else {
            return false;
        };
        if !ancestor.is_expanded() {
            return false;
        }
        if !visited.insert(ancestor.id()) {
            return false;
        }
        current = ancestor;
    }
}

/// Returns the advisory leaf flag; `false` for `None`.
pub fn is_leaf<R: Row>(node: Option<&R>) -> bool {
    node.map(Row::is_leaf).unwrap_or(false)
}

/// Returns the stored expansion flag; `false` for `None`.
pub fn is_expand<R: Row>(node: Option<&R>) -> bool {
    node.map(Row::is_expanded).unwrap_or(false)
}

/// Sets a row's expansion flag. No-op for `None`.
///
/// This is the engine's only mutation point for expansion state; it does
/// not cascade. Descendant visibility follows lazily through [`is_show`].
///
/// # Arguments
/// * `node` - The row to expand or collapse
/// * `expand` - The new expansion state
pub fn collapse<R: Row>(node: Option<&mut R>, expand: bool) {
    let Some(node) = node else {
        return;
    };
    debug!(id = ?node.id(), expand, "set expansion");
    node.set_expanded(expand);
}

/// Returns the currently visible rows, in collection order.
///
/// Convenience for the rendering layer; equivalent to filtering the
/// collection by [`is_show`].
pub fn visible_rows<R: Row>(rows: &[R]) -> Vec<&R> {
    rows.iter().filter(|row| is_show(rows, Some(*row))).collect()
}
