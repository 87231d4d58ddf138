//! Tree relationship queries over a flat row collection.
//!
//! This module derives hierarchy relations purely from `id`/`parent_id`
//! equality; row position in the collection never affects correctness.
//! All queries accept `Option<&R>` and treat `None` as a valid empty
//! query rather than an error, since callers may issue them during
//! partially initialized render cycles.
//!
//! Traversals are iterative with an explicit stack and a visited-id set,
//! so arbitrarily deep trees cannot overflow the call stack and a cyclic
//! `parent_id` chain terminates instead of looping. Cycles are silently
//! truncated here; [`check_integrity`] reports them as errors.

use crate::error::TreeError;
use crate::traits::Row;
use std::collections::{HashMap, HashSet};

/// Returns the direct children of a node, in collection order.
///
/// # Arguments
/// * `rows` - The flat row collection
/// * `node` - The parent node, or `None` for an empty result
pub fn children<'a, R: Row>(rows: &'a [R], node: Option<&R>) -> Vec<&'a R> {
    let Some(node) = node else {
        return Vec::new();
    };
    let id = node.id();
    rows.iter()
        .filter(|row| row.parent_id().as_ref() == Some(&id))
        .collect()
}

/// Returns every descendant of a node in pre-order, excluding the node itself.
///
/// A child's full subtree is emitted before the next sibling. Each
/// descendant appears at most once even if the source data contains a
/// `parent_id` cycle; the visited set truncates repeats.
///
/// # Arguments
/// * `rows` - The flat row collection
/// * `node` - The subtree root, or `None` for an empty result
pub fn all_children<'a, R: Row>(rows: &'a [R], node: Option<&R>) -> Vec<&'a R> {
    let Some(node) = node else {
        return Vec::new();
    };

    let mut result = Vec::new();
    let mut visited: HashSet<R::Id> = HashSet::new();
    visited.insert(node.id());

    // Reverse so the first child is popped first (pre-order on a LIFO stack).
    let mut stack: Vec<&R> = children(rows, Some(node));
    stack.reverse();

    while let Some(current) = stack.pop() {
        if !visited.insert(current.id()) {
            continue;
        }
        result.push(current);
        let mut kids = children(rows, Some(current));
        kids.reverse();
        stack.extend(kids);
    }

    result
}

/// Resolves a node's parent.
///
/// Returns `None` when `node` is `None`, when `parent_id` is unset, or
/// when no row in the collection carries the referenced identifier (the
/// node is then an orphan root for traversal purposes).
///
/// # Arguments
/// * `rows` - The flat row collection
/// * `node` - The node whose parent to resolve
pub fn parent<'a, R: Row>(rows: &'a [R], node: Option<&R>) -> Option<&'a R> {
    let parent_id = node?.parent_id()?;
    rows.iter().find(|row| row.id() == parent_id)
}

/// Returns the ancestor chain of a node, nearest ancestor first, root last.
///
/// The walk stops when no parent resolves or when the chain revisits an
/// identifier (cyclic data).
///
/// # Arguments
/// * `rows` - The flat row collection
/// * `node` - The starting node, or `None` for an empty result
pub fn parents<'a, R: Row>(rows: &'a [R], node: Option<&R>) -> Vec<&'a R> {
    let Some(node) = node else {
        return Vec::new();
    };

    let mut result = Vec::new();
    let mut visited: HashSet<R::Id> = HashSet::new();
    visited.insert(node.id());

    let mut current = node;
    while let Some(ancestor) = parent(rows, Some(current)) {
        if !visited.insert(ancestor.id()) {
            break;
        }
        result.push(ancestor);
        current = ancestor;
    }

    result
}

/// Validates the structural assumptions the queries rely on.
///
/// Reports the first duplicate identifier, then the first row whose
/// ancestor chain revisits an identifier. The traversal queries tolerate
/// both defects by truncating; this pass exists so callers can surface
/// them as data errors instead.
///
/// # Arguments
/// * `rows` - The flat row collection
pub fn check_integrity<R: Row>(rows: &[R]) -> Result<(), TreeError<R::Id>> {
    let mut by_id: HashMap<R::Id, &R> = HashMap::with_capacity(rows.len());
    for row in rows {
        if by_id.insert(row.id(), row).is_some() {
            return Err(TreeError::DuplicateId { id: row.id() });
        }
    }

    for row in rows {
        let mut visited: HashSet<R::Id> = HashSet::new();
        visited.insert(row.id());
        let mut current = row;
        loop {
            let Some(parent_id) = current.parent_id() else {
                break;
            };
            let Some(ancestor) = by_id.get(&parent_id) else {
                // Orphan: the chain terminates, which traversal accepts.
                break;
            };
            if !visited.insert(ancestor.id()) {
                return Err(TreeError::CycleDetected { id: row.id() });
            }
            current = ancestor;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TreeRow;

    fn row(id: u64, parent_id: Option<u64>, level: u32) -> TreeRow {
        TreeRow {
            id,
            parent_id,
            level,
            expanded: false,
            leaf: false,
            title: format!("row-{id}"),
        }
    }

    /// root(1) -> a(2) -> x(4), y(5); b(3)
    fn fixture() -> Vec<TreeRow> {
        vec![
            row(1, None, 1),
            row(2, Some(1), 2),
            row(3, Some(1), 2),
            row(4, Some(2), 3),
            row(5, Some(2), 3),
        ]
    }

    fn ids(rows: &[&TreeRow]) -> Vec<u64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn children_returns_direct_children_in_collection_order() {
        let rows = fixture();
        assert_eq!(ids(&children(&rows, Some(&rows[0]))), vec![2, 3]);
        assert_eq!(ids(&children(&rows, Some(&rows[1]))), vec![4, 5]);
        assert!(children(&rows, Some(&rows[3])).is_empty());
    }

    #[test]
    fn children_of_none_is_empty() {
        let rows = fixture();
        assert!(children::<TreeRow>(&rows, None).is_empty());
    }

    #[test]
    fn all_children_is_preorder_without_self() {
        let rows = fixture();
        // Subtree of 2 before sibling 3.
        assert_eq!(ids(&all_children(&rows, Some(&rows[0]))), vec![2, 4, 5, 3]);
        assert_eq!(ids(&all_children(&rows, Some(&rows[1]))), vec![4, 5]);
        assert!(all_children(&rows, Some(&rows[4])).is_empty());
        assert!(all_children::<TreeRow>(&rows, None).is_empty());
    }

    #[test]
    fn all_children_matches_direct_child_union() {
        let rows = fixture();
        let root = &rows[0];
        let mut expected: Vec<u64> = Vec::new();
        for child in children(&rows, Some(root)) {
            expected.push(child.id);
            expected.extend(ids(&all_children(&rows, Some(child))));
        }
        let mut actual = ids(&all_children(&rows, Some(root)));
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn parent_resolves_by_id() {
        let rows = fixture();
        assert_eq!(parent(&rows, Some(&rows[3])).map(|r| r.id), Some(2));
        assert_eq!(parent(&rows, Some(&rows[1])).map(|r| r.id), Some(1));
        assert!(parent(&rows, Some(&rows[0])).is_none());
        assert!(parent::<TreeRow>(&rows, None).is_none());
    }

    #[test]
    fn parent_of_orphan_is_none() {
        let mut rows = fixture();
        rows.push(row(9, Some(42), 2));
        assert!(parent(&rows, Some(&rows[5])).is_none());
    }

    #[test]
    fn parents_is_nearest_first_root_last() {
        let rows = fixture();
        assert_eq!(ids(&parents(&rows, Some(&rows[3]))), vec![2, 1]);
        assert_eq!(ids(&parents(&rows, Some(&rows[1]))), vec![1]);
        assert!(parents(&rows, Some(&rows[0])).is_empty());
        assert!(parents::<TreeRow>(&rows, None).is_empty());
    }

    #[test]
    fn parents_matches_repeated_parent_calls() {
        let rows = fixture();
        let chain = parents(&rows, Some(&rows[3]));
        let mut expected = Vec::new();
        let mut current = Some(&rows[3]);
        while let Some(p) = parent(&rows, current) {
            expected.push(p);
            current = Some(p);
        }
        assert_eq!(ids(&chain), ids(&expected));
    }

    #[test]
    fn every_child_points_back_at_its_parent() {
        let rows = fixture();
        for node in &rows {
            for child in children(&rows, Some(node)) {
                assert_eq!(parent(&rows, Some(child)).map(|r| r.id), Some(node.id));
            }
        }
    }

    #[test]
    fn cyclic_chain_terminates() {
        // 10 -> 11 -> 10
        let rows = vec![row(10, Some(11), 2), row(11, Some(10), 2)];
        assert_eq!(ids(&parents(&rows, Some(&rows[0]))), vec![11]);
        assert_eq!(ids(&all_children(&rows, Some(&rows[0]))), vec![11]);
    }

    #[test]
    fn self_parent_terminates() {
        let rows = vec![row(7, Some(7), 2)];
        assert!(parents(&rows, Some(&rows[0])).is_empty());
        assert!(all_children(&rows, Some(&rows[0])).is_empty());
    }

    #[test]
    fn check_integrity_accepts_well_formed_and_orphaned_rows() {
        let mut rows = fixture();
        assert_eq!(check_integrity(&rows), Ok(()));
        // Orphans are legal: the chain simply terminates.
        rows.push(row(9, Some(42), 2));
        assert_eq!(check_integrity(&rows), Ok(()));
        assert_eq!(check_integrity::<TreeRow>(&[]), Ok(()));
    }

    #[test]
    fn check_integrity_detects_cycles() {
        let rows = vec![row(1, None, 1), row(10, Some(11), 2), row(11, Some(10), 2)];
        assert_eq!(
            check_integrity(&rows),
            Err(TreeError::CycleDetected { id: 10 })
        );

        let self_ref = vec![row(7, Some(7), 2)];
        assert_eq!(
            check_integrity(&self_ref),
            Err(TreeError::CycleDetected { id: 7 })
        );
    }

    #[test]
    fn check_integrity_detects_duplicate_ids() {
        let rows = vec![row(1, None, 1), row(1, None, 1)];
        assert_eq!(check_integrity(&rows), Err(TreeError::DuplicateId { id: 1 }));
    }
}
