//! Error types for sparse matrix operations

use alloc::string::String;
use thiserror::Error;

/// What was wrong with a line of matrix text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIssue {
    /// The dimension header lines are missing
    MissingDimensions,
    /// Line 1 is not `rows=<n>`
    InvalidRows,
    /// Line 2 is not `cols=<n>`
    InvalidCols,
    /// An element line is not `(<row>, <col>, <value>)`
    InvalidElement,
}

impl core::fmt::Display for FormatIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            FormatIssue::MissingDimensions => "expected 'rows=X' and 'cols=Y' lines",
            FormatIssue::InvalidRows => "expected 'rows=X'",
            FormatIssue::InvalidCols => "expected 'cols=Y'",
            FormatIssue::InvalidElement => "expected '(row, col, value)'",
        };
        write!(f, "{msg}")
    }
}

/// Errors that can occur during sparse matrix operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SmtxError {
    /// The matrix source could not be located
    #[error("file not found: {path}")]
    NotFound { path: String },

    /// Matrix text violates the line grammar
    #[error("line {line}: {issue}: {content:?}")]
    Format {
        /// 1-based line number
        line: usize,
        /// Offending line, trimmed
        content: String,
        issue: FormatIssue,
    },

    /// Operand shapes are incompatible with the operation
    #[error("dimension mismatch for {operation}: {left_rows}x{left_cols} and {right_rows}x{right_cols}")]
    DimensionMismatch {
        operation: &'static str,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// An integer result does not fit the element type
    #[error("integer overflow at ({row}, {col})")]
    Overflow { row: usize, col: usize },

    /// Operation selector outside the recognized set
    #[error("invalid operation choice: {0:?}")]
    InvalidOperation(String),
}

/// Broad classification of errors, used by drivers to pick exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCategory {
    Input,
    Format,
    Shape,
    Arithmetic,
    Usage,
}

impl SmtxError {
    /// Get the category of this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            SmtxError::NotFound { .. } => ErrorCategory::Input,
            SmtxError::Format { .. } => ErrorCategory::Format,
            SmtxError::DimensionMismatch { .. } => ErrorCategory::Shape,
            SmtxError::Overflow { .. } => ErrorCategory::Arithmetic,
            SmtxError::InvalidOperation(_) => ErrorCategory::Usage,
        }
    }

    pub(crate) fn format(line: usize, content: &str, issue: FormatIssue) -> Self {
        SmtxError::Format {
            line,
            content: content.into(),
            issue,
        }
    }
}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, SmtxError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_format_error_display() {
        let err = SmtxError::format(3, "(1, 2)", FormatIssue::InvalidElement);
        assert_eq!(
            err.to_string(),
            "line 3: expected '(row, col, value)': \"(1, 2)\""
        );
        assert_eq!(err.category(), ErrorCategory::Format);
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = SmtxError::DimensionMismatch {
            operation: "addition",
            left_rows: 2,
            left_cols: 3,
            right_rows: 3,
            right_cols: 2,
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch for addition: 2x3 and 3x2"
        );
        assert_eq!(err.category(), ErrorCategory::Shape);
    }

    #[test]
    fn test_categories() {
        let not_found = SmtxError::NotFound {
            path: "missing.txt".into(),
        };
        assert_eq!(not_found.category(), ErrorCategory::Input);
        assert_eq!(
            SmtxError::InvalidOperation("4".into()).category(),
            ErrorCategory::Usage
        );
        assert_eq!(
            SmtxError::Overflow { row: 0, col: 0 }.category(),
            ErrorCategory::Arithmetic
        );
    }
}
