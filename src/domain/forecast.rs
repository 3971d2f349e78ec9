// ============================================================================
// Consensus Forecasts
// ============================================================================

use crate::numeric::Quotation;
use crate::proto::{self, wire_enum, wire_model};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Analyst recommendation
    pub enum Recommendation {
        #[default]
        Unspecified = 0,
        Buy = 1,
        Hold = 2,
        Sell = 3,
    }
}

/// Analyst consensus for one instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConsensusForecast {
    pub uid: String,
    pub asset_uid: String,
    pub created_at: DateTime<Utc>,
    /// Twelve-month target price
    pub best_target_price: Quotation,
    pub best_target_low: Quotation,
    pub best_target_high: Quotation,
    pub total_buy_recommend: i32,
    pub total_hold_recommend: i32,
    pub total_sell_recommend: i32,
    pub currency: String,
    pub consensus: Recommendation,
    pub prognosis_date: DateTime<Utc>,
}

wire_model!(proto::ConsensusForecastsItem => ConsensusForecast {
    uid,
    asset_uid,
    created_at: timestamp,
    best_target_price: or_default,
    best_target_low: or_default,
    best_target_high: or_default,
    total_buy_recommend,
    total_hold_recommend,
    total_sell_recommend,
    currency,
    consensus: into,
    prognosis_date: timestamp,
});

impl ConsensusForecast {
    pub fn total_recommendations(&self) -> i32 {
        self.total_buy_recommend + self.total_hold_recommend + self.total_sell_recommend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_from_wire() {
        let forecast = ConsensusForecast::from(proto::ConsensusForecastsItem {
            uid: "f-1".to_string(),
            best_target_price: Some(proto::Quotation {
                units: 320,
                nano: 500_000_000,
            }),
            total_buy_recommend: 7,
            total_hold_recommend: 2,
            total_sell_recommend: 1,
            currency: "rub".to_string(),
            consensus: 1,
            ..Default::default()
        });

        assert_eq!(forecast.best_target_price, Quotation::new(320, 500_000_000));
        assert!(forecast.best_target_low.is_zero());
        assert_eq!(forecast.consensus, Recommendation::Buy);
        assert_eq!(forecast.total_recommendations(), 10);
    }
}
