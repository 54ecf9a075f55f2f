//! Matrix arithmetic: addition, subtraction, multiplication
//!
//! Shape checks run before a result is allocated, and integer overflow
//! aborts the whole operation, so callers only ever see a complete result.

use alloc::string::ToString;
use core::str::FromStr;

use crate::error::{Result, SmtxError};
use crate::matrix::SparseMatrix;
use crate::traits::MatrixElement;
use crate::validation::{check_inner_dimension, check_same_shape};

impl<T: MatrixElement> SparseMatrix<T> {
    /// Element-wise sum of two matrices of identical shape
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.combine(other, Operation::Add.name(), T::checked_add)
    }

    /// Element-wise difference `self - other` of two matrices of identical shape
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.combine(other, Operation::Subtract.name(), T::checked_sub)
    }

    /// Matrix product `self * other`
    ///
    /// Walks only the stored entries of `self`; for each one, scans the
    /// matching row of `other` across all of its columns. Contributions with
    /// a zero factor are skipped, but accumulated sums that cancel to zero
    /// stay stored.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        check_inner_dimension(
            Operation::Multiply.name(),
            self.dimensions(),
            other.dimensions(),
        )?;

        let mut result = Self::new(self.rows(), other.cols());
        for (row, col, value) in self.iter() {
            if value.is_zero() {
                continue;
            }

            for k in 0..other.cols() {
                let other_value = other.get_element(col, k);
                if other_value.is_zero() {
                    continue;
                }

                let sum = value
                    .checked_mul(other_value)
                    .and_then(|product| result.get_element(row, k).checked_add(product))
                    .ok_or(SmtxError::Overflow { row, col: k })?;
                result.set_element(row, k, sum);
            }
        }

        log::debug!(
            "multiplied {}x{} by {}x{}: {} entries",
            self.rows(),
            self.cols(),
            other.rows(),
            other.cols(),
            result.nnz()
        );
        Ok(result)
    }

    /// Copy `self` into a fresh matrix, then fold each entry of `other` into it
    fn combine(
        &self,
        other: &Self,
        operation: &'static str,
        fold: fn(T, T) -> Option<T>,
    ) -> Result<Self> {
        check_same_shape(operation, self.dimensions(), other.dimensions())?;

        let mut result = Self::new(self.rows(), self.cols());
        for (row, col, value) in self.iter() {
            result.set_element(row, col, value);
        }

        for (row, col, value) in other.iter() {
            let combined = fold(result.get_element(row, col), value)
                .ok_or(SmtxError::Overflow { row, col })?;
            result.set_element(row, col, combined);
        }

        log::debug!(
            "{operation} of {}x{} matrices: {} entries",
            self.rows(),
            self.cols(),
            result.nnz()
        );
        Ok(result)
    }
}

/// Binary operation selector, as chosen by a driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// All operations in menu order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    /// Map a menu choice `1`, `2` or `3` to an operation
    pub fn from_choice(choice: &str) -> Result<Self> {
        match choice.trim() {
            "1" => Ok(Operation::Add),
            "2" => Ok(Operation::Subtract),
            "3" => Ok(Operation::Multiply),
            other => Err(SmtxError::InvalidOperation(other.to_string())),
        }
    }

    /// Menu choice for this operation
    pub const fn choice(&self) -> &'static str {
        match self {
            Operation::Add => "1",
            Operation::Subtract => "2",
            Operation::Multiply => "3",
        }
    }

    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        }
    }

    /// Apply the operation to two operands
    pub fn apply<T: MatrixElement>(
        &self,
        lhs: &SparseMatrix<T>,
        rhs: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Subtract => lhs.subtract(rhs),
            Operation::Multiply => lhs.multiply(rhs),
        }
    }
}

impl FromStr for Operation {
    type Err = SmtxError;

    /// Accepts a menu choice or an operation keyword
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "addition" => Ok(Operation::Add),
            "subtract" | "subtraction" => Ok(Operation::Subtract),
            "multiply" | "multiplication" => Ok(Operation::Multiply),
            _ => Operation::from_choice(s),
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}
