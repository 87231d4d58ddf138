//! Domain logic of the flat-row tree engine.
//!
//! This module contains the pure computations:
//! - Tree operations (children/descendant/parent/ancestor queries, integrity checks)
//! - Visibility (expand/collapse predicates, visible-row flattening)
//! - Selection cascade (downward propagation, upward re-derivation, tri-state)

pub mod selection_cascade;
pub mod tree_operations;
pub mod visibility;
