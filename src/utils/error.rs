//! Error handling for table augmentation
//!
//! This module provides a unified error type and result type for all
//! header-insertion operations.

use std::fmt;

/// Augmentation error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AugmentError {
    /// Output format missing or not one of the supported formats
    UnsupportedFormat { format: Option<String> },
    /// Total span of the header spec disagrees with the table's column count
    ColumnCountMismatch {
        spec_columns: usize,
        table_columns: usize,
    },
    /// The header spec itself is invalid (empty, or a non-positive span)
    MalformedSpec { message: String },
    /// The table markup could not be parsed or its header located
    StructuralParse { message: String },
}

impl fmt::Display for AugmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AugmentError::UnsupportedFormat { format } => {
                if let Some(fmt_name) = format {
                    write!(
                        f,
                        "Unsupported table format '{}'. Specify an explicit output format (html or latex)",
                        fmt_name
                    )
                } else {
                    write!(
                        f,
                        "Table format is unset. Specify an explicit output format (html or latex)"
                    )
                }
            }
            AugmentError::ColumnCountMismatch {
                spec_columns,
                table_columns,
            } => {
                write!(
                    f,
                    "Column count mismatch: header spec covers {} columns but the table has {}",
                    spec_columns, table_columns
                )
            }
            AugmentError::MalformedSpec { message } => {
                write!(f, "Malformed header spec: {}", message)
            }
            AugmentError::StructuralParse { message } => {
                write!(f, "Structural parse error: {}", message)
            }
        }
    }
}

impl std::error::Error for AugmentError {}

/// Result type for augmentation operations
pub type AugmentResult<T> = Result<T, AugmentError>;

// Convenience constructors for errors
impl AugmentError {
    pub fn unsupported_format(format: Option<&str>) -> Self {
        AugmentError::UnsupportedFormat {
            format: format.map(str::to_string),
        }
    }

    pub fn column_mismatch(spec_columns: usize, table_columns: usize) -> Self {
        AugmentError::ColumnCountMismatch {
            spec_columns,
            table_columns,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        AugmentError::MalformedSpec {
            message: message.into(),
        }
    }

    pub fn structural(message: impl Into<String>) -> Self {
        AugmentError::StructuralParse {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_display() {
        let err = AugmentError::unsupported_format(None);
        let msg = err.to_string();
        assert!(msg.contains("unset"));
        assert!(msg.contains("explicit output format"));

        let err = AugmentError::unsupported_format(Some("markdown"));
        assert!(err.to_string().contains("markdown"));
    }

    #[test]
    fn test_column_mismatch_names_both_counts() {
        let err = AugmentError::column_mismatch(5, 4);
        let msg = err.to_string();
        assert!(msg.contains('5'));
        assert!(msg.contains('4'));
    }

    #[test]
    fn test_malformed_spec_display() {
        let err = AugmentError::malformed("span must be positive, got 0");
        let msg = err.to_string();
        assert!(msg.contains("Malformed header spec"));
        assert!(msg.contains("got 0"));
    }

    #[test]
    fn test_structural_parse_display() {
        let err = AugmentError::structural("no header section found");
        assert!(err.to_string().contains("no header section"));
    }
}
