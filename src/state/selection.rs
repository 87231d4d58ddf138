//! Checked-row selection state.
//!
//! This module encapsulates the binary checked-set the cascade engine
//! drives. It stores row identifiers only; tri-state presentation is
//! derived elsewhere and never lands here.

use crate::traits::CheckedSelection;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Set of checked row identifiers.
///
/// Responsibilities:
/// - Tracking which rows are checked
/// - Providing membership queries and idempotent mutations
/// - Serving as the crate's standard [`CheckedSelection`] implementation
#[derive(Debug, Clone, Default)]
pub struct SelectionState<Id> {
    /// Set of checked row IDs
    checked: HashSet<Id>,
}

impl<Id: Clone + Eq + Hash + Debug> SelectionState<Id> {
    /// Creates a selection state with nothing checked.
    pub fn new() -> Self {
        Self {
            checked: HashSet::new(),
        }
    }

    /// Clears all checked state.
    pub fn clear(&mut self) {
        self.checked.clear();
    }

    /// Returns the number of checked rows.
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    /// Returns whether nothing is checked.
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Returns an iterator over the checked row IDs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Id> {
        self.checked.iter()
    }
}

impl<Id: Clone + Eq + Hash + Debug> CheckedSelection<Id> for SelectionState<Id> {
    fn select(&mut self, id: Id) {
        self.checked.insert(id);
    }

    fn deselect(&mut self, id: Id) {
        self.checked.remove(&id);
    }

    fn toggle(&mut self, id: Id) {
        if !self.checked.remove(&id) {
            self.checked.insert(id);
        }
    }

    fn is_selected(&self, id: &Id) -> bool {
        self.checked.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_and_deselect_are_idempotent() {
        let mut state: SelectionState<u64> = SelectionState::new();
        state.select(1);
        state.select(1);
        assert_eq!(state.len(), 1);
        assert!(state.is_selected(&1));

        state.deselect(1);
        state.deselect(1);
        assert!(state.is_empty());
        assert!(!state.is_selected(&1));
    }

    #[test]
    fn toggle_flips_membership() {
        let mut state: SelectionState<u64> = SelectionState::new();
        state.toggle(7);
        assert!(state.is_selected(&7));
        state.toggle(7);
        assert!(!state.is_selected(&7));
    }

    #[test]
    fn clear_empties_the_set() {
        let mut state: SelectionState<u64> = SelectionState::new();
        state.select(1);
        state.select(2);
        state.clear();
        assert!(state.is_empty());
    }
}
