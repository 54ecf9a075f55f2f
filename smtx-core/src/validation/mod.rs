//! Validation utilities for the matrix text format and operand shapes
//!
//! This module contains pure functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{check_inner_dimension, check_same_shape};
pub use parsing::{parse_signed, parse_usize};
