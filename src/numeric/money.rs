// ============================================================================
// Money Value
// Quotation with an attached currency code
// ============================================================================

use super::quotation::Quotation;
use crate::proto;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Monetary amount in a specific currency (ISO code as reported by the API).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyValue {
    pub currency: String,
    pub amount: Quotation,
}

impl MoneyValue {
    pub fn new(currency: impl Into<String>, amount: Quotation) -> Self {
        Self {
            currency: currency.into(),
            amount,
        }
    }

    /// Currency-less part of the amount.
    pub fn quotation(&self) -> Quotation {
        self.amount
    }

    pub fn to_f64(&self) -> f64 {
        self.amount.to_f64()
    }
}

impl fmt::Display for MoneyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl From<proto::MoneyValue> for MoneyValue {
    fn from(wire: proto::MoneyValue) -> Self {
        Self {
            currency: wire.currency,
            amount: Quotation::new(wire.units, wire.nano),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire() {
        let money = MoneyValue::from(proto::MoneyValue {
            currency: "rub".to_string(),
            units: 1000,
            nano: 500_000_000,
        });

        assert_eq!(money.currency, "rub");
        assert_eq!(money.quotation(), Quotation::new(1000, 500_000_000));
        assert_eq!(money.to_f64(), 1000.5);
        assert_eq!(money.to_string(), "1000.500000000 rub");
    }
}
