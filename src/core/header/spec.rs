//! Header span specification and its canonical form
//!
//! User input arrives as a loose sequence of [`HeaderEntry`] values and is
//! normalized once per call into a [`CanonicalHeaderRow`], the read-only form
//! the fragment generators consume.

use crate::utils::error::{AugmentError, AugmentResult};

/// One entry of a user-supplied header spec
///
/// An entry either names a group explicitly with a column span, or is a bare
/// number. Bare numbers are resolved during normalization: in an all-bare
/// spec each number serves as both the displayed label and the span; once any
/// entry carries a label, bare numbers become single-column labels instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderEntry {
    /// Explicit group label with a column span
    Labeled { label: String, span: usize },
    /// A number whose meaning depends on the rest of the spec
    Bare(usize),
}

impl HeaderEntry {
    /// Create a labeled entry spanning `span` columns
    pub fn labeled(label: impl Into<String>, span: usize) -> Self {
        HeaderEntry::Labeled {
            label: label.into(),
            span,
        }
    }

    /// Create a bare numeric entry
    pub fn bare(n: usize) -> Self {
        HeaderEntry::Bare(n)
    }
}

impl From<&str> for HeaderEntry {
    fn from(label: &str) -> Self {
        HeaderEntry::labeled(label, 1)
    }
}

impl From<(&str, usize)> for HeaderEntry {
    fn from((label, span): (&str, usize)) -> Self {
        HeaderEntry::labeled(label, span)
    }
}

impl From<usize> for HeaderEntry {
    fn from(n: usize) -> Self {
        HeaderEntry::Bare(n)
    }
}

/// One cell of the canonical header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Displayed group label (may be blank)
    pub label: String,
    /// Number of columns the cell covers, always >= 1
    pub span: usize,
}

impl HeaderCell {
    pub fn new(label: impl Into<String>, span: usize) -> Self {
        HeaderCell {
            label: label.into(),
            span,
        }
    }
}

/// Canonical, validated form of a header spec
///
/// Invariants: at least one cell, every span >= 1. Built fresh per call and
/// only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalHeaderRow {
    cells: Vec<HeaderCell>,
}

impl CanonicalHeaderRow {
    /// Normalize a user-supplied spec into canonical form
    ///
    /// Rejects empty specs and zero spans before any markup is touched.
    pub fn from_entries(entries: &[HeaderEntry]) -> AugmentResult<Self> {
        if entries.is_empty() {
            return Err(AugmentError::malformed("header spec is empty"));
        }

        let any_labeled = entries
            .iter()
            .any(|e| matches!(e, HeaderEntry::Labeled { .. }));

        let mut cells = Vec::with_capacity(entries.len());
        for entry in entries {
            let cell = match entry {
                HeaderEntry::Labeled { label, span } => HeaderCell::new(label.clone(), *span),
                // In an all-bare spec a number is both label and span;
                // alongside labeled entries it is a single-column label.
                HeaderEntry::Bare(n) => {
                    if any_labeled {
                        HeaderCell::new(n.to_string(), 1)
                    } else {
                        HeaderCell::new(n.to_string(), *n)
                    }
                }
            };
            if cell.span == 0 {
                return Err(AugmentError::malformed(format!(
                    "span must be positive, got 0 for label '{}'",
                    cell.label
                )));
            }
            cells.push(cell);
        }

        Ok(CanonicalHeaderRow { cells })
    }

    pub fn cells(&self) -> &[HeaderCell] {
        &self.cells
    }

    /// Total number of columns the row covers
    pub fn total_span(&self) -> usize {
        self.cells.iter().map(|c| c.span).sum()
    }

    /// Express the row back as explicit labeled entries
    ///
    /// Re-normalizing the result is a no-op.
    pub fn to_entries(&self) -> Vec<HeaderEntry> {
        self.cells
            .iter()
            .map(|c| HeaderEntry::labeled(c.label.clone(), c.span))
            .collect()
    }

    /// Validate the row against the table's column count
    pub fn check_column_count(&self, table_columns: usize) -> AugmentResult<()> {
        let spec_columns = self.total_span();
        if spec_columns != table_columns {
            return Err(AugmentError::column_mismatch(spec_columns, table_columns));
        }
        Ok(())
    }
}
