//! Dictionary-of-keys sparse matrix
//!
//! Entries are kept in first-insertion order with a hash index from
//! `(row, col)` to their position, so serialization order is stable across
//! a text round trip.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;

use hashbrown::HashMap;

use crate::error::{FormatIssue, Result, SmtxError};
use crate::format::{Header, MatrixEntry};
use crate::traits::{MatrixElement, MatrixOperations, SparseView};

/// Sparse integer matrix keyed by `(row, col)`
///
/// Absent coordinates read as zero. Dimensions grow when an element is set
/// outside the current extent.
#[derive(Debug, Clone)]
pub struct SparseMatrix<T: MatrixElement = i64> {
    rows: usize,
    cols: usize,
    entries: Vec<MatrixEntry<T>>,
    index: HashMap<(usize, usize), usize>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get matrix dimensions as (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored entries, explicit zeros included
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether a coordinate has a stored entry
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.index.contains_key(&(row, col))
    }

    /// Get the value at `(row, col)`, or zero if nothing is stored there
    ///
    /// No bounds check: reads outside the extent return zero.
    pub fn get_element(&self, row: usize, col: usize) -> T {
        self.index
            .get(&(row, col))
            .map_or(T::ZERO, |&pos| self.entries[pos].value)
    }

    /// Insert or overwrite the value at `(row, col)`
    ///
    /// Grows `rows`/`cols` to cover the coordinate. An overwritten entry
    /// keeps its original position.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is `usize::MAX`, which no extent can cover.
    pub fn set_element(&mut self, row: usize, col: usize, value: T) {
        assert!(
            row < usize::MAX && col < usize::MAX,
            "coordinate ({row}, {col}) is beyond the largest addressable extent"
        );
        if row >= self.rows {
            self.rows = row + 1;
        }
        if col >= self.cols {
            self.cols = col + 1;
        }

        match self.index.get(&(row, col)) {
            Some(&pos) => self.entries[pos].value = value,
            None => {
                self.index.insert((row, col), self.entries.len());
                self.entries.push(MatrixEntry { row, col, value });
            }
        }
    }

    /// Iterate over stored `(row, col, value)` in storage order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.entries.iter().map(|e| (e.row, e.col, e.value))
    }

    /// Remove stored entries whose value is zero
    ///
    /// Returns the number of entries removed. Remaining entries keep their
    /// relative order.
    pub fn prune_zeros(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !e.value.is_zero());
        let removed = before - self.entries.len();

        if removed > 0 {
            self.index = self
                .entries
                .iter()
                .enumerate()
                .map(|(pos, e)| ((e.row, e.col), pos))
                .collect();
            log::debug!("pruned {removed} zero-valued entries");
        }

        removed
    }

    /// Parse a matrix from its text form
    ///
    /// The first two lines must be `rows=<n>` and `cols=<n>`; every later
    /// non-blank line must be `(<row>, <col>, <value>)`. Duplicate
    /// coordinates overwrite earlier ones.
    pub fn from_text(content: &str) -> Result<Self> {
        let lines: Vec<&str> = content.lines().map(str::trim).collect();
        let header = Header::parse(&lines)?;

        let mut matrix = Self::new(header.rows, header.cols);
        for (i, line) in lines.iter().enumerate().skip(crate::format::constants::HEADER_LINES) {
            if line.is_empty() {
                continue;
            }

            let entry = MatrixEntry::<T>::parse(line)
                .ok_or_else(|| SmtxError::format(i + 1, line, FormatIssue::InvalidElement))?;
            matrix.set_element(entry.row, entry.col, entry.value);
        }

        log::trace!(
            "parsed {}x{} matrix with {} entries",
            matrix.rows,
            matrix.cols,
            matrix.nnz()
        );
        Ok(matrix)
    }

    /// Render the matrix in its text form, without a trailing newline
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl<T: MatrixElement> Default for SparseMatrix<T> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Structural equality: same dimensions and the same entries in the same order
impl<T: MatrixElement> PartialEq for SparseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.entries == other.entries
    }
}

impl<T: MatrixElement> core::fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", Header::new(self.rows, self.cols))?;
        for entry in &self.entries {
            write!(f, "\n{entry}")?;
        }
        Ok(())
    }
}

impl<T: MatrixElement> FromStr for SparseMatrix<T> {
    type Err = SmtxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}

impl<T: MatrixElement> SparseView for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> T {
        SparseMatrix::get_element(self, row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        SparseMatrix::dimensions(self)
    }

    fn nnz(&self) -> usize {
        SparseMatrix::nnz(self)
    }
}

impl<T: MatrixElement> MatrixOperations for SparseMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        let mut row: Vec<(usize, T)> = self
            .entries
            .iter()
            .filter(|e| e.row == row_index)
            .map(|e| (e.col, e.value))
            .collect();
        row.sort_unstable_by_key(|&(col, _)| col);
        row
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        let mut col: Vec<(usize, T)> = self
            .entries
            .iter()
            .filter(|e| e.col == col_index)
            .map(|e| (e.row, e.value))
            .collect();
        col.sort_unstable_by_key(|&(row, _)| row);
        col
    }
}
