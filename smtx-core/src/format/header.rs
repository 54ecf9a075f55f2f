//! Dimension header of the matrix text format

use super::constants::{COLS_KEY, HEADER_LINES, ROWS_KEY};
use crate::error::{FormatIssue, Result, SmtxError};
use crate::validation::parse_usize;

/// The two dimension lines at the top of a matrix file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl Header {
    /// Create a header for the given dimensions
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Parse the header from the first lines of a document
    ///
    /// `lines` must already be trimmed. Fewer than two lines reports the
    /// first missing line number.
    pub fn parse(lines: &[&str]) -> Result<Self> {
        if lines.len() < HEADER_LINES {
            return Err(SmtxError::format(
                lines.len() + 1,
                "",
                FormatIssue::MissingDimensions,
            ));
        }

        let rows = parse_dimension(lines[0], ROWS_KEY)
            .ok_or_else(|| SmtxError::format(1, lines[0], FormatIssue::InvalidRows))?;
        let cols = parse_dimension(lines[1], COLS_KEY)
            .ok_or_else(|| SmtxError::format(2, lines[1], FormatIssue::InvalidCols))?;

        Ok(Self { rows, cols })
    }
}

/// Parse a `<key><digits>` line
pub fn parse_dimension(line: &str, key: &str) -> Option<usize> {
    parse_usize(line.strip_prefix(key)?)
}

impl core::fmt::Display for Header {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{ROWS_KEY}{}\n{COLS_KEY}{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_parse_header() {
        assert_eq!(Header::parse(&["rows=3", "cols=4"]), Ok(Header::new(3, 4)));
        assert_eq!(Header::parse(&["rows=0", "cols=0"]), Ok(Header::new(0, 0)));
    }

    #[test]
    fn test_parse_header_too_short() {
        let err = Header::parse(&["rows=3"]).unwrap_err();
        assert_eq!(
            err,
            SmtxError::Format {
                line: 2,
                content: "".into(),
                issue: FormatIssue::MissingDimensions,
            }
        );
        assert!(Header::parse(&[]).is_err());
    }

    #[test]
    fn test_parse_header_invalid() {
        let err = Header::parse(&["ROWS=3", "cols=4"]).unwrap_err();
        assert_eq!(
            err,
            SmtxError::Format {
                line: 1,
                content: "ROWS=3".into(),
                issue: FormatIssue::InvalidRows,
            }
        );

        let err = Header::parse(&["rows=3", "cols=x"]).unwrap_err();
        assert!(matches!(
            err,
            SmtxError::Format {
                line: 2,
                issue: FormatIssue::InvalidCols,
                ..
            }
        ));

        // Order matters and trailing content is rejected
        assert!(Header::parse(&["cols=4", "rows=3"]).is_err());
        assert!(Header::parse(&["rows=3x", "cols=4"]).is_err());
        assert!(Header::parse(&["rows= 3", "cols=4"]).is_err());
    }

    #[test]
    fn test_header_display() {
        assert_eq!(Header::new(2, 5).to_string(), "rows=2\ncols=5");
    }
}
