pub mod domain;
pub mod error;
pub mod record;
pub mod state;
pub mod traits;

// Export the external seams
pub use traits::{CheckedSelection, Row};

// Export the query and cascade API
pub use domain::selection_cascade::{is_row_indeterminate, is_selected, row_toggle};
pub use domain::tree_operations::{all_children, check_integrity, children, parent, parents};
pub use domain::visibility::{collapse, is_expand, is_leaf, is_show, visible_rows};

// Export the provided implementations
pub use error::TreeError;
pub use record::TreeRow;
pub use state::SelectionState;
