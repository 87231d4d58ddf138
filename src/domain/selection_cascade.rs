//! Cascading checkbox selection with computed tri-state.
//!
//! The checked-selection set only knows binary membership. Toggling a row
//! propagates that binary state down to every descendant, then re-derives
//! each ancestor bottom-up from its direct children. The third presented
//! state, indeterminate, is a pure function of direct children answered at
//! query time; nothing tri-state is ever stored, so it can never go stale.
//!
//! Going upward, tri-state collapses to binary: an ancestor is checked only
//! when every direct child is checked, so a partially selected (indeterminate)
//! child counts as unchecked for its parent.

use crate::domain::tree_operations::{all_children, children, parent};
use crate::traits::{CheckedSelection, Row};
use std::collections::HashSet;
use tracing::debug;

/// Returns whether a row is checked; `false` for `None`.
pub fn is_selected<R, S>(selection: &S, node: Option<&R>) -> bool
where
    R: Row,
    S: CheckedSelection<R::Id>,
{
    node.map(|n| selection.is_selected(&n.id())).unwrap_or(false)
}

/// Toggles a row's checked state and cascades the change through the tree.
///
/// Three steps, in order:
/// 1. Flip the row's own membership in the selection set.
/// 2. Force every descendant to the row's post-toggle state.
/// 3. Walk the ancestor chain, re-deriving each ancestor from its direct
///    children and applying the result before moving up, so a grandparent
///    sees the just-updated parent.
///
/// No-op for `None`.
///
/// # Arguments
/// * `rows` - The flat row collection
/// * `selection` - The checked-selection set
/// * `node` - The toggled row
pub fn row_toggle<R, S>(rows: &[R], selection: &mut S, node: Option<&R>)
where
    R: Row,
    S: CheckedSelection<R::Id>,
{
    let Some(node) = node else {
        return;
    };
    selection.toggle(node.id());
    let checked = selection.is_selected(&node.id());
    debug!(id = ?node.id(), checked, "row toggled, cascading");
    toggle_all_children(rows, selection, node);
    toggle_parents(rows, selection, node);
}

/// Forces every descendant to the node's current checked state.
///
/// Unconditional propagation: prior per-descendant state is overwritten,
/// not merged.
fn toggle_all_children<R, S>(rows: &[R], selection: &mut S, node: &R)
where
    R: Row,
    S: CheckedSelection<R::Id>,
{
    let checked = selection.is_selected(&node.id());
    for descendant in all_children(rows, Some(node)) {
        if checked {
            selection.select(descendant.id());
        } else {
            selection.deselect(descendant.id());
        }
    }
}

/// Re-derives each ancestor's checked state, nearest first.
fn toggle_parents<R, S>(rows: &[R], selection: &mut S, node: &R)
where
    R: Row,
    S: CheckedSelection<R::Id>,
{
    let mut visited: HashSet<R::Id> = HashSet::new();
    visited.insert(node.id());

    let mut current = node;
    while let Some(ancestor) = parent(rows, Some(current)) {
        if is_children_all_checked(rows, selection, ancestor) {
            selection.select(ancestor.id());
        } else {
            selection.deselect(ancestor.id());
        }
        if !visited.insert(ancestor.id()) {
            // Cyclic chain; stop instead of looping.
            break;
        }
        current = ancestor;
    }
}

/// Returns whether a node has at least one direct child and all of them are
/// checked. Zero direct children count as "not all checked".
fn is_children_all_checked<R, S>(rows: &[R], selection: &S, node: &R) -> bool
where
    R: Row,
    S: CheckedSelection<R::Id>,
{
    let kids = children(rows, Some(node));
    if kids.is_empty() {
        return false;
    }
    kids.iter().all(|child| selection.is_selected(&child.id()))
}

/// Returns whether a row is partially selected: at least one direct child,
/// some checked, not all checked. Rows without children are never
/// indeterminate, and `None` yields `false`.
///
/// # Arguments
/// * `rows` - The flat row collection
/// * `selection` - The checked-selection set
/// * `node` - The row to test
pub fn is_row_indeterminate<R, S>(rows: &[R], selection: &S, node: Option<&R>) -> bool
where
    R: Row,
    S: CheckedSelection<R::Id>,
{
    let kids = children(rows, node);
    if kids.is_empty() {
        return false;
    }
    let any = kids.iter().any(|child| selection.is_selected(&child.id()));
    let all = kids.iter().all(|child| selection.is_selected(&child.id()));
    any && !all
}
