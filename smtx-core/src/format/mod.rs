//! Text format definitions for sparse matrix files
//!
//! ```text
//! rows=<R>
//! cols=<C>
//! (<r1>, <c1>, <v1>)
//! (<r2>, <c2>, <v2>)
//! ```
//!
//! This module contains line-level grammar only. Whole-document parsing lives
//! on [`SparseMatrix`](crate::SparseMatrix).

pub mod constants;
pub mod element;
pub mod header;

pub use element::MatrixEntry;
pub use header::Header;
