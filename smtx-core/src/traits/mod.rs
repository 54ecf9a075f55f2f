//! Abstract interfaces for sparse matrices
//!
//! Element constraints and read-only views, independent of how a matrix
//! stores its entries.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::{MatrixOperations, SparseView};
