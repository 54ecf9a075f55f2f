//! Read-only matrix access traits
//!
//! These are pure interfaces; `SparseMatrix` is the concrete implementation.

use alloc::vec::Vec;

use super::element::MatrixElement;

/// Core sparse matrix trait for storage-agnostic access
pub trait SparseView {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Absent entries, including positions outside the current extent,
    /// read as zero.
    fn get_element(&self, row: usize, col: usize) -> Self::Element;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of stored elements
    fn nnz(&self) -> usize;
}

/// Extension trait for row/column operations
pub trait MatrixOperations: SparseView {
    /// Get all stored elements in a row as `(col, value)`
    ///
    /// Elements are returned in column order.
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Get all stored elements in a column as `(row, value)`
    ///
    /// Elements are returned in row order.
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}
