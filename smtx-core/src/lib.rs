#![no_std]

//! smtx core - sparse integer matrices and their text format
//!
//! This crate provides the sparse matrix data structure, the three binary
//! operations over it, and the line-based text format definitions. It
//! performs no I/O.

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::*;
pub use format::{Header, MatrixEntry};
pub use matrix::SparseMatrix;
pub use ops::Operation;
pub use traits::{MatrixElement, MatrixOperations, SparseView};
pub use validation::{check_inner_dimension, check_same_shape, parse_signed, parse_usize};
