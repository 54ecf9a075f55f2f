//! Serializable matrix summaries

use serde::{Deserialize, Serialize};
use smtx_core::{MatrixElement, SparseMatrix};

/// Shape and storage statistics of a matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixSummary {
    pub rows: usize,
    pub cols: usize,
    /// Stored entries, explicit zeros included
    pub nnz: usize,
    /// Stored entries whose value is zero
    pub explicit_zeros: usize,
    /// `nnz / (rows * cols)`, or 0 for an empty shape
    pub density: f64,
}

impl MatrixSummary {
    pub fn of<T: MatrixElement>(matrix: &SparseMatrix<T>) -> Self {
        let (rows, cols) = matrix.dimensions();
        let cells = rows as f64 * cols as f64;
        let nnz = matrix.nnz();

        Self {
            rows,
            cols,
            nnz,
            explicit_zeros: matrix.iter().filter(|&(_, _, v)| v.is_zero()).count(),
            density: if cells > 0.0 { nnz as f64 / cells } else { 0.0 },
        }
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
