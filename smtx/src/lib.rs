//! smtx - sparse integer matrix files
//!
//! This crate adds file I/O, summaries, and a calculator CLI on top of
//! `smtx-core`.
//!
//! ## Architecture
//!
//! - **smtx-core**: matrix storage, arithmetic, text format grammar (no I/O)
//! - **smtx**: reading and writing matrix files, summaries, the `smtx` binary
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smtx::{read_matrix, write_matrix, IoConfig, Operation};
//!
//! fn example() -> smtx::Result<()> {
//!     let a = read_matrix("a.txt")?;
//!     let b = read_matrix("b.txt")?;
//!
//!     let product = Operation::Multiply.apply(&a, &b)?;
//!     write_matrix("product.txt", &product, &IoConfig::default())?;
//!     Ok(())
//! }
//! ```

// Re-export core abstractions and format definitions
pub use smtx_core::{
    // Core types
    SparseMatrix, Operation, MatrixEntry, Header,
    // Traits
    MatrixElement, MatrixOperations, SparseView,
    // Error handling
    SmtxError, FormatIssue, ErrorCategory,
};

pub mod config;
pub mod error;
pub mod file_io;
#[cfg(feature = "serde")]
pub mod summary;

pub use config::IoConfig;
pub use error::{Error, Result};
pub use file_io::{read_matrix, read_matrix_as, write_matrix};
#[cfg(feature = "serde")]
pub use summary::MatrixSummary;
