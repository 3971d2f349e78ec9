// ============================================================================
// Domain Models Module
// Language-native models decoded from wire messages
// ============================================================================

pub mod asset_report;
pub mod forecast;
pub mod operation;
pub mod report;

pub use asset_report::{AssetReport, AssetReportPeriodType};
pub use forecast::{ConsensusForecast, Recommendation};
pub use operation::{
    OperationItem, OperationState, OperationTrade, OperationType, OperationsByCursor,
    OperationsCursorRequest,
};
pub use report::{
    BrokerReport, BrokerReportItem, DividendsForeignIssuerItem, DividendsForeignIssuerReport,
    GeneratedReport,
};
