// ============================================================================
// Numeric Errors
// Error types for quotation arithmetic and validation
// ============================================================================

use thiserror::Error;

/// Errors that can occur during quotation arithmetic or validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the representable range
    #[error("arithmetic overflow: result exceeded maximum value")]
    Overflow,
    /// Result below the representable range
    #[error("arithmetic underflow: result below minimum value")]
    Underflow,
    /// Conversion would lose significant digits
    #[error("precision loss: conversion would lose significant digits")]
    PrecisionLoss,
    /// Input string or value is invalid
    #[error("invalid input: could not parse value")]
    InvalidInput,
    /// `|nano|` is not below one billion
    #[error("nano component {0} is outside (-1000000000, 1000000000)")]
    NanoOutOfRange(i32),
    /// `units` and `nano` are both nonzero with opposite signs
    #[error("units {units} and nano {nano} carry opposite signs")]
    SignMismatch { units: i64, nano: i32 },
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded maximum value"
        );
        assert_eq!(
            NumericError::SignMismatch {
                units: 1,
                nano: -5
            }
            .to_string(),
            "units 1 and nano -5 carry opposite signs"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::Underflow);
        assert_ne!(
            NumericError::NanoOutOfRange(1),
            NumericError::NanoOutOfRange(2)
        );
    }
}
