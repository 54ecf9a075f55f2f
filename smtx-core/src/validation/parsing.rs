//! Integer parsing for the matrix text format
//!
//! The text format only admits plain ASCII decimal digits, so these helpers
//! are stricter than `str::parse`: no `+` sign, no whitespace, no empty input.

use crate::traits::MatrixElement;

/// Parse a non-negative decimal integer into a usize
///
/// Returns `None` for empty input, any non-digit byte, or overflow.
pub fn parse_usize(s: &str) -> Option<usize> {
    if s.is_empty() {
        return None;
    }

    let mut result: usize = 0;

    for byte in s.bytes() {
        if !byte.is_ascii_digit() {
            return None;
        }

        let digit = (byte - b'0') as usize;
        result = result.checked_mul(10)?.checked_add(digit)?;
    }

    Some(result)
}

/// Parse a decimal integer with an optional leading `-`
///
/// Returns `None` if the text is not `-?[0-9]+` or the value does not fit `T`.
pub fn parse_signed<T: MatrixElement>(s: &str) -> Option<T> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    T::parse_decimal(s)
}
