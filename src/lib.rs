//! # tabspan
//!
//! Post-processing header grouping for rendered HTML and LaTeX tables.
//!
//! ## Features
//!
//! - **Post-processor, not a renderer**: consumes markup an external table
//!   renderer already produced, plus its structural metadata, and splices in
//!   one grouping header row whose cells may span multiple columns
//! - **Both formats**: HTML (DOM tree splice) and LaTeX (text splice after
//!   the table's top rule)
//! - **Booktabs aware**: `\toprule`/`\cmidrule` or `\hline`/`\cline` rule
//!   families, resolved from the renderer's metadata
//! - **Validated**: the spec's total span must match the table's column
//!   count; malformed specs are rejected before any markup is touched
//! - **Stackable**: every call is pure, so repeated calls stack further
//!   group rows above earlier ones
//!
//! ## Usage Examples
//!
//! ### LaTeX
//!
//! ```rust
//! use tabspan::{add_header_above, HeaderEntry, TableObject};
//!
//! let markup = "\\begin{tabular}{|c|c|c|c|}\n\\hline\na & b & c & d \\\\\n\\hline\n\\end{tabular}";
//! let table = TableObject::latex(markup, 4, false);
//!
//! let spec = [HeaderEntry::from(("A", 2)), HeaderEntry::from(("B", 2))];
//! let grouped = add_header_above(&table, &spec).unwrap();
//!
//! assert!(grouped.markup.contains("\\multicolumn{2}{c|}{A}"));
//! assert!(grouped.markup.contains("\\cline{1-2} \\cline{3-4}"));
//! ```
//!
//! ### HTML
//!
//! ```rust
//! use tabspan::{add_header_above, HeaderEntry, TableObject};
//!
//! let markup = "<table><thead><tr><th>a</th><th>b</th><th>c</th></tr></thead>\
//!               <tbody><tr><td>1</td><td>2</td><td>3</td></tr></tbody></table>";
//! let table = TableObject::html(markup, 3);
//!
//! let spec = [HeaderEntry::from(" "), HeaderEntry::from(("Group", 2))];
//! let grouped = add_header_above(&table, &spec).unwrap();
//!
//! assert!(grouped.markup.contains("Group"));
//! ```

/// Core transformation modules
pub mod core;

/// Utility modules
pub mod utils;

// Re-export the augmentation API
pub use crate::core::header::{
    add_header_above, add_header_above_with_options, CanonicalHeaderRow, HeaderCell, HeaderEntry,
    HeaderOptions, RuleStyle,
};

// Re-export table types
pub use crate::core::table::{TableFormat, TableMeta, TableObject};

// Re-export utilities
pub use utils::error::{AugmentError, AugmentResult};
