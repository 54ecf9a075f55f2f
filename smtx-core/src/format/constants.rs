//! Format constants for the matrix text format

/// Prefix of the first line
pub const ROWS_KEY: &str = "rows=";

/// Prefix of the second line
pub const COLS_KEY: &str = "cols=";

/// Number of dimension lines before the element lines
pub const HEADER_LINES: usize = 2;

/// Opening delimiter of an element line
pub const ELEMENT_OPEN: char = '(';

/// Closing delimiter of an element line
pub const ELEMENT_CLOSE: char = ')';

/// Separator between element fields
pub const FIELD_SEPARATOR: char = ',';

/// Whitespace accepted after a field separator
pub const FIELD_PADDING: &[char] = &[' ', '\t'];

/// Largest row or column index an element line may address
///
/// One below `usize::MAX` so the extent `index + 1` always fits.
pub const MAX_INDEX: usize = usize::MAX - 1;
