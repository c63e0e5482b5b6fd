//! Sort selection types and the sorting engine.

pub mod sorting;
pub mod types;

pub use sorting::{ContextKind, SortContext, SortContextBuilder, SortController, SortMenuEntry};
pub use types::{DateOrdering, SortKey, SortOrder, SortState, UnknownSortKey};
