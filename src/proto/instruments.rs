// ============================================================================
// InstrumentsService Messages
// ============================================================================

use super::{Page, PageResponse, Quotation};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GetConsensusForecastsRequest {
    pub paging: Option<Page>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GetConsensusForecastsResponse {
    pub items: Vec<ConsensusForecastsItem>,
    pub page: Option<PageResponse>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConsensusForecastsItem {
    pub uid: String,
    pub asset_uid: String,
    pub created_at: Option<DateTime<Utc>>,
    pub best_target_price: Option<Quotation>,
    pub best_target_low: Option<Quotation>,
    pub best_target_high: Option<Quotation>,
    pub total_buy_recommend: i32,
    pub total_hold_recommend: i32,
    pub total_sell_recommend: i32,
    pub currency: String,
    pub consensus: i32,
    pub prognosis_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GetAssetReportsRequest {
    pub instrument_id: String,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GetAssetReportsResponse {
    pub events: Vec<GetAssetReportsEvent>,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GetAssetReportsEvent {
    pub instrument_id: String,
    pub report_date: Option<DateTime<Utc>>,
    pub period_year: i32,
    pub period_num: i32,
    pub period_type: i32,
    pub created_at: Option<DateTime<Utc>>,
}
