//! Element lines of the matrix text format

use super::constants::{ELEMENT_CLOSE, ELEMENT_OPEN, FIELD_PADDING, FIELD_SEPARATOR, MAX_INDEX};
use crate::traits::MatrixElement;
use crate::validation::{parse_signed, parse_usize};

/// One stored element; its `Display` form is an element line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixEntry<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T: MatrixElement> MatrixEntry<T> {
    /// Parse a trimmed element line
    ///
    /// Whitespace is accepted only directly after a comma.
    pub fn parse(line: &str) -> Option<Self> {
        let inner = line
            .strip_prefix(ELEMENT_OPEN)?
            .strip_suffix(ELEMENT_CLOSE)?;

        let mut fields = inner.split(FIELD_SEPARATOR);
        let row = fields.next()?;
        let col = fields.next()?.trim_start_matches(FIELD_PADDING);
        let value = fields.next()?.trim_start_matches(FIELD_PADDING);
        if fields.next().is_some() {
            return None;
        }

        Some(Self {
            row: parse_index(row)?,
            col: parse_index(col)?,
            value: parse_signed(value)?,
        })
    }
}

fn parse_index(s: &str) -> Option<usize> {
    parse_usize(s).filter(|&index| index <= MAX_INDEX)
}

impl<T: MatrixElement> core::fmt::Display for MatrixEntry<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.row, self.col, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn entry(row: usize, col: usize, value: i64) -> Option<MatrixEntry<i64>> {
        Some(MatrixEntry { row, col, value })
    }

    #[test]
    fn test_parse_element() {
        assert_eq!(MatrixEntry::parse("(0, 1, 5)"), entry(0, 1, 5));
        assert_eq!(MatrixEntry::parse("(10,20,-7)"), entry(10, 20, -7));
        assert_eq!(MatrixEntry::parse("(1,   2,\t3)"), entry(1, 2, 3));
    }

    #[test]
    fn test_parse_element_rejects_misplaced_whitespace() {
        assert_eq!(MatrixEntry::<i64>::parse("( 0, 1, 5)"), None);
        assert_eq!(MatrixEntry::<i64>::parse("(0 , 1, 5)"), None);
        assert_eq!(MatrixEntry::<i64>::parse("(0, 1, 5 )"), None);
        assert_eq!(MatrixEntry::<i64>::parse("(0, 1, - 5)"), None);
    }

    #[test]
    fn test_parse_element_invalid() {
        assert_eq!(MatrixEntry::<i64>::parse(""), None);
        assert_eq!(MatrixEntry::<i64>::parse("(0, 1)"), None);
        assert_eq!(MatrixEntry::<i64>::parse("(0, 1, 2, 3)"), None);
        assert_eq!(MatrixEntry::<i64>::parse("0, 1, 2"), None);
        assert_eq!(MatrixEntry::<i64>::parse("(-1, 1, 2)"), None);
        assert_eq!(MatrixEntry::<i64>::parse("(0, 1, 2.5)"), None);
        assert_eq!(MatrixEntry::<i64>::parse("(0, 1, +2)"), None);
        assert_eq!(MatrixEntry::<i64>::parse("(0, 1, 2) trailing"), None);
        assert_eq!(MatrixEntry::<i32>::parse("(0, 1, 4294967296)"), None);
        assert_eq!(MatrixEntry::<i64>::parse("(18446744073709551615, 0, 1)"), None);
        assert_eq!(MatrixEntry::<i64>::parse("(0, 18446744073709551615, 1)"), None);
        assert_eq!(
            MatrixEntry::<i64>::parse("(18446744073709551614, 0, 1)"),
            Some(MatrixEntry {
                row: MAX_INDEX,
                col: 0,
                value: 1
            })
        );
    }

    #[test]
    fn test_element_display() {
        let element = MatrixEntry {
            row: 3,
            col: 0,
            value: -12i64,
        };
        assert_eq!(element.to_string(), "(3, 0, -12)");
    }
}
