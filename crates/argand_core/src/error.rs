//! # Complex Error Types
//!
//! Errors reported by the checked API. The operators themselves never fail.

use thiserror::Error;

/// Degenerate inputs detected by the checked operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComplexError {
    /// The divisor was the zero value.
    #[error("division by the zero value")]
    DivisionByZero,

    /// The zero value was raised to a negative power.
    #[error("zero raised to negative power {degree}")]
    ZeroToNegativePower {
        /// The requested degree.
        degree: i32,
    },
}

/// Result type for checked complex operations.
pub type ComplexResult<T> = Result<T, ComplexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ComplexError::DivisionByZero.to_string(),
            "division by the zero value"
        );
        assert_eq!(
            ComplexError::ZeroToNegativePower { degree: -3 }.to_string(),
            "zero raised to negative power -3"
        );
    }
}
