// ============================================================================
// Quotation
// Currency-less fixed-point amount stored as whole units plus nano fraction
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::proto;
use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One whole unit expressed in nanos (10^9)
pub const NANO_FACTOR: i64 = 1_000_000_000;

const NANO_FACTOR_F64: f64 = 1_000_000_000.0;

/// Currency-less monetary amount with nine fractional digits.
///
/// The value is `units + nano / 10^9`. Both parts carry the sign of the
/// value, so `-1.25` is stored as `units = -1, nano = -250_000_000`.
///
/// Ordering is lexicographic on `(units, nano)`, which agrees with numeric
/// ordering for pairs that keep the sign invariant (see [`Quotation::is_canonical`]).
///
/// # Example
/// ```
/// use invest_api::numeric::{Quotation, RoundingMode};
///
/// let price = Quotation::new(101, 250_000_000); // 101.25
/// let step = Quotation::new(0, 10_000_000); // 0.01
///
/// let stop = price.decrease_by_with_step(3.0, step, RoundingMode::Down);
/// assert_eq!(stop, Quotation::new(98, 210_000_000));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quotation {
    units: i64,
    nano: i32,
}

/// Direction used when snapping a value onto a price step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Toward the next step multiple above the value
    Up,
    /// Toward the previous step multiple below the value
    #[default]
    Down,
}

#[derive(Clone, Copy)]
enum Adjustment {
    Increase,
    Decrease,
}

impl Quotation {
    /// Zero value
    pub const ZERO: Self = Self { units: 0, nano: 0 };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a raw `(units, nano)` pair.
    ///
    /// No validation is performed so raw wire values pass through untouched.
    /// Use [`Quotation::try_new`] at boundaries that accept user input.
    #[inline]
    pub const fn new(units: i64, nano: i32) -> Self {
        Self { units, nano }
    }

    /// Create from a `(units, nano)` pair, rejecting non-canonical input.
    ///
    /// # Errors
    /// - `NanoOutOfRange` if `|nano| >= 10^9`
    /// - `SignMismatch` if both parts are nonzero with opposite signs
    pub fn try_new(units: i64, nano: i32) -> NumericResult<Self> {
        if i64::from(nano).abs() >= NANO_FACTOR {
            return Err(NumericError::NanoOutOfRange(nano));
        }
        if (units > 0 && nano < 0) || (units < 0 && nano > 0) {
            return Err(NumericError::SignMismatch { units, nano });
        }
        Ok(Self { units, nano })
    }

    /// The zero quotation `(0, 0)`.
    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Split a floating-point value into whole units and a nano fraction.
    ///
    /// The whole part is truncated toward zero and the fraction is scaled by
    /// 10^9 and truncated toward zero as well, so both parts share the sign of
    /// `value`. The result approximates `value` to double precision; it is not
    /// bit-exact because of binary/decimal conversion error. Non-finite input
    /// saturates through `as` casts (`NaN` becomes zero).
    pub fn from_f64(value: f64) -> Self {
        let whole = value.trunc();
        let fraction = ((value - whole) * NANO_FACTOR_F64).trunc();
        Self::new(whole as i64, fraction as i32)
    }

    /// Create from a total count of nanos.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the whole part does not fit in i64.
    pub fn from_nanos(total: i128) -> NumericResult<Self> {
        let factor = i128::from(NANO_FACTOR);
        let units = total / factor;
        let nano = (total % factor) as i32;

        if units > i128::from(i64::MAX) {
            Err(NumericError::Overflow)
        } else if units < i128::from(i64::MIN) {
            Err(NumericError::Underflow)
        } else {
            Ok(Self::new(units as i64, nano))
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Signed whole part.
    #[inline]
    pub const fn units(self) -> i64 {
        self.units
    }

    /// Signed fractional part scaled by 10^9.
    #[inline]
    pub const fn nano(self) -> i32 {
        self.nano
    }

    /// Whether `|nano| < 10^9` and the two parts agree in sign.
    pub const fn is_canonical(self) -> bool {
        let nano = self.nano as i64;
        let in_range = nano > -NANO_FACTOR && nano < NANO_FACTOR;
        let signs_agree = !((self.units > 0 && self.nano < 0) || (self.units < 0 && self.nano > 0));
        in_range && signs_agree
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.units == 0 && self.nano == 0
    }

    /// Exact value as a count of nanos.
    #[inline]
    pub const fn to_nanos(self) -> i128 {
        self.units as i128 * NANO_FACTOR as i128 + self.nano as i128
    }

    /// `units + nano / 10^9`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.units as f64 + f64::from(self.nano) / NANO_FACTOR_F64
    }

    // ========================================================================
    // Percentage Adjustment
    // ========================================================================

    /// Increase by `percentage` percent without step rounding.
    pub fn increase_by(self, percentage: f64) -> Self {
        Self::from_f64(self.adjusted(Adjustment::Increase, percentage))
    }

    /// Decrease by `percentage` percent without step rounding.
    pub fn decrease_by(self, percentage: f64) -> Self {
        Self::from_f64(self.adjusted(Adjustment::Decrease, percentage))
    }

    /// Increase by `percentage` percent, then snap onto `price_step`.
    ///
    /// Only the `nano` component of `price_step` acts as the rounding modulus;
    /// a step with a zero `nano` (for example `1.0`) leaves the result unrounded.
    pub fn increase_by_with_step(
        self,
        percentage: f64,
        price_step: Quotation,
        rounding: RoundingMode,
    ) -> Self {
        self.increase_by(percentage)
            .round_to_step(price_step, rounding)
    }

    /// Decrease by `percentage` percent, then snap onto `price_step`.
    ///
    /// See [`Quotation::increase_by_with_step`] for the step semantics.
    pub fn decrease_by_with_step(
        self,
        percentage: f64,
        price_step: Quotation,
        rounding: RoundingMode,
    ) -> Self {
        self.decrease_by(percentage)
            .round_to_step(price_step, rounding)
    }

    /// Round the `nano` component to a multiple of `price_step.nano()`.
    ///
    /// With `r = nano % step` (truncating), `Down` subtracts `r` and `Up` adds
    /// `step - r` when `r` is nonzero. The remainder follows the sign of `nano`,
    /// so `Down` moves a negative value toward zero. A `nano` pushed outside
    /// `[0, 10^9)` wraps into the whole part. The result is returned in
    /// canonical form.
    pub fn round_to_step(self, price_step: Quotation, rounding: RoundingMode) -> Self {
        let step = i64::from(price_step.nano).abs();
        if step == 0 {
            return self;
        }

        let nano = i64::from(self.nano);
        let remainder = nano % step;
        let nano = match rounding {
            RoundingMode::Down => nano - remainder,
            RoundingMode::Up if remainder != 0 => nano + (step - remainder),
            RoundingMode::Up => nano,
        };

        let units = self.units.saturating_add(nano.div_euclid(NANO_FACTOR));
        Self::canonical(units, nano.rem_euclid(NANO_FACTOR))
    }

    fn adjusted(self, adjustment: Adjustment, percentage: f64) -> f64 {
        let value = self.to_f64();
        let delta = value * percentage / 100.0;
        match adjustment {
            Adjustment::Increase => value + delta,
            Adjustment::Decrease => value - delta,
        }
    }

    // Folds a pair with fraction in [0, 10^9) back into sign-consistent form.
    fn canonical(units: i64, fraction: i64) -> Self {
        if units < 0 && fraction > 0 {
            Self::new(units + 1, (fraction - NANO_FACTOR) as i32)
        } else {
            Self::new(units, fraction as i32)
        }
    }

    // ========================================================================
    // Checked Arithmetic
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    pub fn checked_add(self, rhs: Self) -> NumericResult<Self> {
        Self::from_nanos(self.to_nanos() + rhs.to_nanos())
    }

    /// Checked subtraction.
    ///
    /// # Errors
    /// Returns `Overflow` or `Underflow` if the result is out of range.
    pub fn checked_sub(self, rhs: Self) -> NumericResult<Self> {
        Self::from_nanos(self.to_nanos() - rhs.to_nanos())
    }

    /// Absolute value.
    ///
    /// # Errors
    /// Returns `Overflow` for `units == i64::MIN`.
    pub fn abs(self) -> NumericResult<Self> {
        Self::from_nanos(self.to_nanos().abs())
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Neg for Quotation {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.units, -self.nano)
    }
}

impl From<f64> for Quotation {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<proto::Quotation> for Quotation {
    fn from(wire: proto::Quotation) -> Self {
        Self::new(wire.units, wire.nano)
    }
}

impl From<Quotation> for proto::Quotation {
    fn from(value: Quotation) -> Self {
        proto::Quotation {
            units: value.units,
            nano: value.nano,
        }
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Quotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quotation({}, units={}, nano={})",
            self, self.units, self.nano
        )
    }
}

impl fmt::Display for Quotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.to_nanos();
        let sign = if total < 0 { "-" } else { "" };
        let magnitude = total.unsigned_abs();
        let factor = NANO_FACTOR as u128;
        write!(
            f,
            "{}{}.{:09}",
            sign,
            magnitude / factor,
            magnitude % factor
        )
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Quotation {
    /// Convert from rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `PrecisionLoss` if the decimal has significant digits past the ninth
    /// - `Overflow`/`Underflow` if the whole part does not fit in i64
    pub fn from_decimal(d: rust_decimal::Decimal) -> NumericResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let scaled = d
            .checked_mul(rust_decimal::Decimal::from(NANO_FACTOR))
            .ok_or(NumericError::Overflow)?;

        if !scaled.fract().is_zero() {
            return Err(NumericError::PrecisionLoss);
        }

        let total = scaled.to_i128().ok_or(NumericError::Overflow)?;
        Self::from_nanos(total)
    }

    /// Convert to rust_decimal::Decimal with scale 9.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::from_i128_with_scale(self.to_nanos(), 9)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Quotation {
    type Err = NumericError;

    /// Parse from a decimal string.
    ///
    /// # Examples
    /// - "123" -> (123, 0)
    /// - "123.456" -> (123, 456000000)
    /// - "-0.001" -> (0, -1000000)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (is_negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, frac_str),
            None => (s, ""),
        };

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_str) || !all_digits(frac_str) {
            return Err(NumericError::InvalidInput);
        }
        if frac_str.len() > 9 {
            return Err(NumericError::PrecisionLoss);
        }

        let units: i64 = if int_str.is_empty() {
            0
        } else {
            int_str.parse().map_err(|_| NumericError::Overflow)?
        };

        let nano: i32 = if frac_str.is_empty() {
            0
        } else {
            format!("{:0<9}", frac_str)
                .parse()
                .map_err(|_| NumericError::InvalidInput)?
        };

        if is_negative {
            Ok(Self::new(-units, -nano))
        } else {
            Ok(Self::new(units, nano))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(Quotation::zero().to_f64(), 0.0);
        assert_eq!(Quotation::zero(), Quotation::new(0, 0));
        assert_eq!(Quotation::default(), Quotation::ZERO);
        assert!(Quotation::ZERO.is_zero());
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(Quotation::new(123, 500_000_000).to_f64(), 123.5);
        assert_eq!(Quotation::new(-2, -250_000_000).to_f64(), -2.25);
    }

    #[test]
    fn test_from_f64_scenario() {
        let q = Quotation::from_f64(123.456789);
        assert_eq!(q.units(), 123);
        assert!((i64::from(q.nano()) - 456_789_000).abs() <= 1);
        assert!((q.to_f64() - 123.456789).abs() < 1e-8);
    }

    #[test]
    fn test_from_f64_truncates_toward_zero() {
        let q = Quotation::from_f64(-7.75);
        assert_eq!(q.units(), -7);
        assert_eq!(q.nano(), -750_000_000);

        let q = Quotation::from_f64(0.5);
        assert_eq!(q, Quotation::new(0, 500_000_000));
    }

    #[test]
    fn test_from_f64_nan_is_zero() {
        assert_eq!(Quotation::from_f64(f64::NAN), Quotation::ZERO);
    }

    #[test]
    fn test_try_new() {
        assert!(Quotation::try_new(5, 999_999_999).is_ok());
        assert!(Quotation::try_new(-5, -1).is_ok());
        assert!(Quotation::try_new(0, -500_000_000).is_ok());
        assert_eq!(
            Quotation::try_new(1, 1_000_000_000),
            Err(NumericError::NanoOutOfRange(1_000_000_000))
        );
        assert_eq!(
            Quotation::try_new(1, -1),
            Err(NumericError::SignMismatch { units: 1, nano: -1 })
        );
    }

    #[test]
    fn test_new_is_permissive() {
        let raw = Quotation::new(1, 1_500_000_000);
        assert_eq!(raw.nano(), 1_500_000_000);
        assert!(!raw.is_canonical());
        assert!(!Quotation::new(-1, 5).is_canonical());
        assert!(Quotation::new(-1, -5).is_canonical());
    }

    #[test]
    fn test_ordering() {
        let a = Quotation::new(10, 100);
        let b = Quotation::new(10, 200);
        let c = Quotation::new(11, 0);
        let d = Quotation::new(0, -500_000_000);

        assert!(a < b);
        assert!(b < c);
        assert!(d < Quotation::ZERO);
        assert_eq!(a.max(c), c);
        assert_ne!(a, b);
    }

    #[test]
    fn test_increase_by_zero_is_identity() {
        let q = Quotation::new(250, 120_000_000);
        assert_eq!(q.increase_by(0.0).to_f64(), q.to_f64());
        assert_eq!(q.decrease_by(0.0).to_f64(), q.to_f64());
    }

    #[test]
    fn test_increase_and_decrease() {
        let q = Quotation::new(200, 0);
        assert_eq!(q.increase_by(10.0), Quotation::new(220, 0));
        assert_eq!(q.decrease_by(25.0), Quotation::new(150, 0));
    }

    #[test]
    fn test_increase_then_decrease_is_not_identity() {
        let q = Quotation::new(100, 0);
        let back = q.increase_by(10.0).decrease_by(10.0);
        assert_eq!(back, Quotation::new(99, 0));
    }

    #[test]
    fn test_step_rounding_down_and_up() {
        let step = Quotation::new(0, 100_000_000);
        let q = Quotation::new(1, 250_000_000);

        let down = q.increase_by_with_step(0.0, step, RoundingMode::Down);
        assert_eq!(down, Quotation::new(1, 200_000_000));

        let up = q.increase_by_with_step(0.0, step, RoundingMode::Up);
        assert_eq!(up, Quotation::new(1, 300_000_000));
    }

    #[test]
    fn test_step_rounding_default_is_down() {
        let step = Quotation::new(0, 100_000_000);
        let q = Quotation::new(1, 250_000_000);
        assert_eq!(
            q.round_to_step(step, RoundingMode::default()),
            Quotation::new(1, 200_000_000)
        );
    }

    #[test]
    fn test_step_rounding_exact_multiple_unchanged() {
        let step = Quotation::new(0, 50_000_000);
        let q = Quotation::new(3, 450_000_000);
        assert_eq!(q.round_to_step(step, RoundingMode::Up), q);
        assert_eq!(q.round_to_step(step, RoundingMode::Down), q);
    }

    #[test]
    fn test_step_rounding_carries_into_units() {
        let step = Quotation::new(0, 300_000_000);
        let q = Quotation::new(1, 950_000_000);
        assert_eq!(
            q.round_to_step(step, RoundingMode::Up),
            Quotation::new(2, 200_000_000)
        );
        assert_eq!(
            q.round_to_step(step, RoundingMode::Down),
            Quotation::new(1, 900_000_000)
        );
    }

    #[test]
    fn test_step_rounding_negative_value() {
        let step = Quotation::new(0, 100_000_000);
        let q = Quotation::new(-1, -250_000_000);
        // -1.25: the remainder is -0.05, so Down lands on -1.2 and Up on -1.1
        assert_eq!(
            q.round_to_step(step, RoundingMode::Down),
            Quotation::new(-1, -200_000_000)
        );
        assert_eq!(
            q.round_to_step(step, RoundingMode::Up),
            Quotation::new(-1, -100_000_000)
        );

        let below_one = Quotation::new(0, -950_000_000);
        assert_eq!(
            below_one.round_to_step(step, RoundingMode::Up),
            Quotation::new(0, -800_000_000)
        );
        assert_eq!(
            Quotation::new(-3, 0).round_to_step(step, RoundingMode::Up),
            Quotation::new(-3, 0)
        );
    }

    #[test]
    fn test_step_without_nano_leaves_value() {
        let q = Quotation::new(7, 123_456_789);
        assert_eq!(q.round_to_step(Quotation::new(1, 0), RoundingMode::Up), q);
        assert_eq!(q.round_to_step(Quotation::ZERO, RoundingMode::Down), q);
    }

    #[test]
    fn test_stop_price_from_reference() {
        let reference = Quotation::new(101, 250_000_000);
        let step = Quotation::new(0, 10_000_000);

        let stop = reference.decrease_by_with_step(3.0, step, RoundingMode::Down);
        assert_eq!(stop, Quotation::new(98, 210_000_000));

        let take = reference.increase_by_with_step(5.0, step, RoundingMode::Up);
        assert_eq!(take, Quotation::new(106, 320_000_000));
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Quotation::new(1, 700_000_000);
        let b = Quotation::new(0, 400_000_000);
        assert_eq!(a.checked_add(b).unwrap(), Quotation::new(2, 100_000_000));
        assert_eq!(b.checked_sub(a).unwrap(), Quotation::new(-1, -300_000_000));
        assert_eq!(
            Quotation::new(i64::MAX, 999_999_999).checked_add(b),
            Err(NumericError::Overflow)
        );
        assert_eq!(
            Quotation::new(i64::MIN, -999_999_999).checked_sub(b),
            Err(NumericError::Underflow)
        );
    }

    #[test]
    fn test_abs_and_neg() {
        let q = Quotation::new(-3, -10);
        assert_eq!(q.abs().unwrap(), Quotation::new(3, 10));
        assert_eq!(-q, Quotation::new(3, 10));
        assert_eq!(
            Quotation::new(i64::MIN, 0).abs(),
            Err(NumericError::Overflow)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Quotation::new(123, 456_000_000).to_string(), "123.456000000");
        assert_eq!(Quotation::ZERO.to_string(), "0.000000000");
        assert_eq!(Quotation::new(0, -100_000_000).to_string(), "-0.100000000");
        assert_eq!(Quotation::new(-5, -5).to_string(), "-5.000000005");
    }

    #[test]
    fn test_from_str() {
        let x: Quotation = "123.456".parse().unwrap();
        assert_eq!(x, Quotation::new(123, 456_000_000));

        let y: Quotation = "-0.001".parse().unwrap();
        assert_eq!(y, Quotation::new(0, -1_000_000));

        let z: Quotation = "42".parse().unwrap();
        assert_eq!(z, Quotation::new(42, 0));

        let w: Quotation = ".5".parse().unwrap();
        assert_eq!(w, Quotation::new(0, 500_000_000));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            "not_a_number".parse::<Quotation>(),
            Err(NumericError::InvalidInput)
        );
        assert_eq!("--5".parse::<Quotation>(), Err(NumericError::InvalidInput));
        assert_eq!(".".parse::<Quotation>(), Err(NumericError::InvalidInput));
        assert_eq!(
            "1.1234567890".parse::<Quotation>(),
            Err(NumericError::PrecisionLoss)
        );
    }

    #[test]
    fn test_decimal_conversion() {
        use rust_decimal::Decimal;

        let d = Decimal::new(-12345, 2); // -123.45
        let q = Quotation::from_decimal(d).unwrap();
        assert_eq!(q, Quotation::new(-123, -450_000_000));
        assert_eq!(q.to_decimal(), d);

        let too_fine = Decimal::new(1, 10);
        assert_eq!(
            Quotation::from_decimal(too_fine),
            Err(NumericError::PrecisionLoss)
        );
    }

    #[test]
    fn test_wire_conversion() {
        let wire = proto::Quotation {
            units: 12,
            nano: 340_000_000,
        };
        let q = Quotation::from(wire.clone());
        assert_eq!(q, Quotation::new(12, 340_000_000));
        assert_eq!(proto::Quotation::from(q), wire);
    }
}
