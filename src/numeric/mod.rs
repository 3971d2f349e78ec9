// ============================================================================
// Numeric Module
// Fixed-point quotation arithmetic for prices and monetary amounts
// ============================================================================
//
// This module provides:
// - Quotation: units + nano fixed-point amount (9 fractional digits)
// - MoneyValue: Quotation with a currency code
// - RoundingMode: direction for snapping onto an exchange price step
// - NumericError: Error types for checked operations
//
// Percentage adjustment goes through f64 and is re-quantized; everything else
// is exact integer arithmetic on a total nano count.

mod errors;
mod money;
mod quotation;

pub use errors::{NumericError, NumericResult};
pub use money::MoneyValue;
pub use quotation::{Quotation, RoundingMode, NANO_FACTOR};
