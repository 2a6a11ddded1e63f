//! Table objects exchanged with the external renderer
//!
//! A [`TableObject`] is the artifact this crate transforms: rendered markup
//! text plus the structural sidecar the renderer recorded alongside it. The
//! sidecar is a passthrough - it is copied onto the output object unchanged
//! and never recomputed from the markup.

use std::fmt;
use std::str::FromStr;

use crate::utils::error::AugmentError;

/// Output format of a rendered table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Html,
    Latex,
}

impl TableFormat {
    /// Format tag as the renderer ecosystem spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            TableFormat::Html => "html",
            TableFormat::Latex => "latex",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableFormat {
    type Err = AugmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(TableFormat::Html),
            "latex" => Ok(TableFormat::Latex),
            other => Err(AugmentError::unsupported_format(Some(other))),
        }
    }
}

/// Structural sidecar produced by the external renderer
///
/// `column_count` is the number of columns the renderer laid out. `booktabs`
/// records which horizontal-rule family the LaTeX markup uses (ignored for
/// HTML). `aligns` is the per-column alignment vector as the renderer wrote
/// it; this crate carries it forward but never consults it, since inserted
/// group cells are always centered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMeta {
    pub column_count: usize,
    pub booktabs: bool,
    pub aligns: Vec<char>,
}

impl TableMeta {
    pub fn new(column_count: usize) -> Self {
        TableMeta {
            column_count,
            booktabs: false,
            aligns: Vec::new(),
        }
    }

    pub fn with_booktabs(column_count: usize) -> Self {
        TableMeta {
            column_count,
            booktabs: true,
            aligns: Vec::new(),
        }
    }
}

/// A rendered table plus its structural metadata
///
/// `format` is `None` when the renderer never tagged its output; consumers
/// requiring a format reject such objects rather than guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableObject {
    /// Rendered markup text
    pub markup: String,
    /// Output format tag, if the renderer set one
    pub format: Option<TableFormat>,
    /// Structural sidecar, carried forward unchanged by every transform
    pub meta: TableMeta,
}

impl TableObject {
    pub fn new(markup: impl Into<String>, format: Option<TableFormat>, meta: TableMeta) -> Self {
        TableObject {
            markup: markup.into(),
            format,
            meta,
        }
    }

    /// Wrap rendered HTML table markup
    pub fn html(markup: impl Into<String>, column_count: usize) -> Self {
        TableObject {
            markup: markup.into(),
            format: Some(TableFormat::Html),
            meta: TableMeta::new(column_count),
        }
    }

    /// Wrap rendered LaTeX table markup
    pub fn latex(markup: impl Into<String>, column_count: usize, booktabs: bool) -> Self {
        TableObject {
            markup: markup.into(),
            format: Some(TableFormat::Latex),
            meta: TableMeta {
                column_count,
                booktabs,
                aligns: Vec::new(),
            },
        }
    }

    /// New object with replaced markup and everything else carried forward
    pub fn with_markup(&self, markup: String) -> Self {
        TableObject {
            markup,
            format: self.format,
            meta: self.meta.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_round_trip() {
        assert_eq!("html".parse::<TableFormat>().unwrap(), TableFormat::Html);
        assert_eq!("LaTeX".parse::<TableFormat>().unwrap(), TableFormat::Latex);
        assert_eq!(TableFormat::Latex.to_string(), "latex");
    }

    #[test]
    fn test_format_rejects_unknown() {
        let err = "markdown".parse::<TableFormat>().unwrap_err();
        assert!(matches!(err, AugmentError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_with_markup_carries_meta() {
        let table = TableObject::latex("\\begin{tabular}", 3, true);
        let out = table.with_markup("changed".to_string());
        assert_eq!(out.markup, "changed");
        assert_eq!(out.format, Some(TableFormat::Latex));
        assert_eq!(out.meta, table.meta);
    }
}
