//! Card sorting - re-exports from domain.
//!
//! The sorting logic has moved to kanban-domain.
//! This module provides re-exports for backward compatibility.

pub use kanban_domain::sort::{
    get_sorter_for_field, CardNumberSorter, CardSorter, CreatedAtSorter, OrderedSorter,
    PointsSorter, PositionSorter, PrioritySorter, StatusSorter, UpdatedAtSorter,
};
