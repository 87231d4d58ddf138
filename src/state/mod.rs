//! State containers owned by the caller.
//!
//! Expansion state lives on the rows themselves (the `expanded` flag), so
//! the only container here is the checked-selection set.

mod selection;

pub use selection::SelectionState;
