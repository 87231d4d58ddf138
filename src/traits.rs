//! External seams of the tree engine.
//!
//! The engine does not own its data. The flat row collection and the
//! checked-selection set both live with the caller (typically a table
//! component); these traits describe the minimal contract the engine
//! needs from each of them.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for a record participating in the hierarchy.
///
/// Rows form a tree purely through `id`/`parent_id` references; the
/// collection containing them stays flat. `level` is the nesting depth
/// supplied by the data source, with `1` denoting a root.
pub trait Row {
    /// Opaque row identifier, compared only for equality.
    type Id: Clone + Eq + Hash + Debug;

    /// Returns this row's identifier.
    fn id(&self) -> Self::Id;

    /// Returns the identifier of the logical parent, or `None` for roots.
    fn parent_id(&self) -> Option<Self::Id>;

    /// Returns the nesting depth (`1` = root).
    fn level(&self) -> u32;

    /// Returns the stored expansion flag.
    fn is_expanded(&self) -> bool;

    /// Sets the expansion flag.
    ///
    /// This is the only row field the engine ever writes.
    fn set_expanded(&mut self, expanded: bool);

    /// Returns the advisory leaf flag.
    ///
    /// The flag is supplied by the data source and is not re-derived from
    /// actual child presence; the engine reports it verbatim.
    fn is_leaf(&self) -> bool;
}

/// Trait for the checked-selection set the cascade engine drives.
///
/// The set is the single source of truth for binary checked state. It holds
/// no tri-state: the indeterminate presentation value is always computed
/// from direct children at query time, never stored here.
pub trait CheckedSelection<Id> {
    /// Marks the row checked. Idempotent.
    fn select(&mut self, id: Id);

    /// Marks the row unchecked. Idempotent.
    fn deselect(&mut self, id: Id);

    /// Flips the row's checked state.
    fn toggle(&mut self, id: Id);

    /// Returns whether the row is currently checked.
    fn is_selected(&self, id: &Id) -> bool;
}
