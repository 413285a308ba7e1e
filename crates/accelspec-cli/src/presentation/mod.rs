//! Shared CLI presentation utilities.
//!
//! This module provides reusable display and formatting functions
//! for consistent CLI output across commands.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no catalog queries
//! - Functions return strings; handlers decide where they are printed

pub mod slice_display;
pub mod tables;

// Re-export commonly used items
pub use slice_display::{SliceView, format_slice_details, format_slice_table};
pub use tables::{separator, truncate_string};
