//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements. Only signed integers qualify.

use core::fmt::{Debug, Display};

/// Trait for types that can be stored as matrix elements
///
/// All matrix element types must be:
/// - Copy: Can be copied without allocation
/// - PartialEq: Can be compared for equality
/// - Display: Can be written in the text format
pub trait MatrixElement: Copy + PartialEq + Debug + Display + Sized {
    /// The additive identity, the implicit value of absent entries
    const ZERO: Self;

    /// Name of the type, for diagnostics
    fn type_name() -> &'static str;

    /// Check whether this value is zero
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Parse text already validated as `-?[0-9]+`
    ///
    /// Returns `None` if the value does not fit.
    fn parse_decimal(s: &str) -> Option<Self>;
}

macro_rules! impl_matrix_element {
    ($($ty:ty),*) => {
        $(
            impl MatrixElement for $ty {
                const ZERO: Self = 0;

                fn type_name() -> &'static str {
                    stringify!($ty)
                }

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }

                fn parse_decimal(s: &str) -> Option<Self> {
                    s.parse().ok()
                }
            }
        )*
    };
}

impl_matrix_element!(i32, i64, i128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert!(<i64 as MatrixElement>::ZERO.is_zero());
        assert!(!MatrixElement::is_zero(-1i32));
        assert_eq!(<i128 as MatrixElement>::type_name(), "i128");
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(MatrixElement::checked_add(2i64, 3), Some(5));
        assert_eq!(MatrixElement::checked_sub(2i64, 3), Some(-1));
        assert_eq!(MatrixElement::checked_mul(-4i64, 3), Some(-12));
        assert_eq!(MatrixElement::checked_add(i32::MAX, 1), None);
        assert_eq!(MatrixElement::checked_mul(i64::MAX, 2), None);
    }
}
