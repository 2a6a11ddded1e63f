//! Core transformation modules
//!
//! This module contains the augmentation engine:
//! - `table`: table objects and renderer metadata
//! - `header`: grouped-header normalization, rendering, and splicing

pub mod header;
pub mod table;

// Re-export main types and functions from header
pub use header::{
    add_header_above, add_header_above_with_options, CanonicalHeaderRow, HeaderCell, HeaderEntry,
    HeaderOptions, RuleStyle,
};

// Re-export main types from table
pub use table::{TableFormat, TableMeta, TableObject};
