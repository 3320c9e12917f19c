//! UI Components
//!
//! Leptos rendering of the include/exclude category pair.

mod category_filter;

pub use category_filter::CategoryFilterForm;
