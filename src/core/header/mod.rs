//! Grouped-header insertion engine
//!
//! Splices one additional header row, whose cells may span multiple columns,
//! above the existing header of an already-rendered table.
//!
//! # Architecture
//!
//! ```text
//! HeaderEntry spec -> Normalizer -> Fragment Generator -> Splice -> TableObject
//! ```
//!
//! The dispatcher routes on the table's format tag: HTML goes through a DOM
//! tree splice, LaTeX through line-oriented text composition. Each call is
//! pure; stacking several group rows means calling repeatedly, and the caller
//! owns the column-count bookkeeping between calls.

mod html;
mod latex;
mod rules;
mod spec;


// Re-export public API
pub use rules::RuleStyle;
pub use spec::{CanonicalHeaderRow, HeaderCell, HeaderEntry};

use crate::core::table::{TableFormat, TableObject};
use crate::utils::error::{AugmentError, AugmentResult};

/// Options for header insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Escape special LaTeX characters in group labels (LaTeX output only;
    /// the HTML serializer escapes on its own)
    pub escape: bool,
    /// Underline non-blank groups with partial rules (LaTeX output only)
    pub line: bool,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        HeaderOptions {
            escape: true,
            line: true,
        }
    }
}

/// Insert a grouping header row above a table's existing header
///
/// `spec` is normalized, validated against the table's column count, rendered
/// as a format-specific fragment, and spliced into the markup. The returned
/// object carries the input's format and metadata unchanged.
///
/// Calls are pure and independent; invoke repeatedly to stack group rows
/// (each inserted row lands above the previous one).
pub fn add_header_above(table: &TableObject, spec: &[HeaderEntry]) -> AugmentResult<TableObject> {
    add_header_above_with_options(table, spec, &HeaderOptions::default())
}

/// [`add_header_above`] with explicit [`HeaderOptions`]
pub fn add_header_above_with_options(
    table: &TableObject,
    spec: &[HeaderEntry],
    options: &HeaderOptions,
) -> AugmentResult<TableObject> {
    let format = table
        .format
        .ok_or_else(|| AugmentError::unsupported_format(None))?;

    // Fail fast: spec problems are rejected before any markup is touched.
    let row = CanonicalHeaderRow::from_entries(spec)?;
    row.check_column_count(table.meta.column_count)?;

    let markup = match format {
        TableFormat::Html => html::insert_header_row(&table.markup, &row, table.meta.column_count)?,
        TableFormat::Latex => {
            let style = RuleStyle::from_meta(table.meta.booktabs);
            latex::insert_header_row(&table.markup, &row, style, options)?
        }
    };

    Ok(table.with_markup(markup))
}
