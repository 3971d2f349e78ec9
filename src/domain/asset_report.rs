// ============================================================================
// Asset Reports
// Issuer financial reporting calendar
// ============================================================================

use crate::proto::{self, wire_enum, wire_model};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

wire_enum! {
    pub enum AssetReportPeriodType {
        #[default]
        Unspecified = 0,
        Quarter = 1,
        Semiannual = 2,
        Annual = 3,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssetReport {
    pub instrument_id: String,
    /// Publication date
    pub report_date: DateTime<Utc>,
    pub period_year: i32,
    pub period_num: i32,
    pub period_type: AssetReportPeriodType,
    pub created_at: DateTime<Utc>,
}

wire_model!(proto::GetAssetReportsEvent => AssetReport {
    instrument_id,
    report_date: timestamp,
    period_year,
    period_num,
    period_type: into,
    created_at: timestamp,
});
