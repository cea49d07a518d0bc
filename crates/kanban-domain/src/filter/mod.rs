//! Card filtering functionality.
//!
//! Provides traits and implementations for filtering cards by various criteria.

pub mod card_filter;
pub mod card_filters;

pub use card_filter::{BoardFilter, CardFilter, ColumnFilter, SprintFilter, UnassignedOnlyFilter};
pub use card_filters::CardFilters;
