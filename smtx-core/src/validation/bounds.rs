//! Shape validation for binary matrix operations
//!
//! Checks run before any result is built, so a failed operation never
//! produces a partial matrix.

use crate::{Result, SmtxError};

/// Require two `(rows, cols)` shapes to be identical
pub fn check_same_shape(
    operation: &'static str,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<()> {
    if left != right {
        return Err(mismatch(operation, left, right));
    }
    Ok(())
}

/// Require `left.cols == right.rows`
pub fn check_inner_dimension(
    operation: &'static str,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<()> {
    if left.1 != right.0 {
        return Err(mismatch(operation, left, right));
    }
    Ok(())
}

fn mismatch(operation: &'static str, left: (usize, usize), right: (usize, usize)) -> SmtxError {
    SmtxError::DimensionMismatch {
        operation,
        left_rows: left.0,
        left_cols: left.1,
        right_rows: right.0,
        right_cols: right.1,
    }
}
