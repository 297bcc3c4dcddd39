//! Drill-through filters (verb module)
//!
//! Filters offered when a single result cell is clicked.

mod quick_filter;

pub use quick_filter::{quick_filter_drills, QuickFilterDrill};
