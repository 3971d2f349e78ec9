// ============================================================================
// Wire Messages
// Plain structs mirroring the API's protobuf contract
// ============================================================================
//
// These types stand in for generated message code: field names and shapes
// follow the contract (`tinkoff.public.invest.api.contract.v1`), enums travel
// as raw i32 and nested messages as Option. Domain conversion lives next to
// the domain types via `wire_model!`.

mod instruments;
mod mapping;
mod operations;

pub(crate) use mapping::{wire_enum, wire_model};

pub use instruments::{
    ConsensusForecastsItem, GetAssetReportsEvent, GetAssetReportsRequest,
    GetAssetReportsResponse, GetConsensusForecastsRequest, GetConsensusForecastsResponse,
};
pub use operations::{
    BrokerReport, BrokerReportPayload, BrokerReportRequest, BrokerReportResponse,
    DividendsForeignIssuerPayload, DividendsForeignIssuerReport, GenerateBrokerReportRequest,
    GenerateBrokerReportResponse, GenerateDividendsForeignIssuerReportRequest,
    GenerateDividendsForeignIssuerReportResponse, GetBrokerReportRequest,
    GetBrokerReportResponse, GetDividendsForeignIssuerReportRequest,
    GetDividendsForeignIssuerReportResponse, GetDividendsForeignIssuerRequest,
    GetDividendsForeignIssuerResponse, GetOperationsByCursorRequest,
    GetOperationsByCursorResponse, OperationItem, OperationItemTrade, OperationItemTrades,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Currency-less amount.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quotation {
    pub units: i64,
    pub nano: i32,
}

/// Amount with currency code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoneyValue {
    pub currency: String,
    pub units: i64,
    pub nano: i32,
}

/// Page selector sent with paged requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Page {
    pub limit: i32,
    pub page_number: i32,
}

/// Paging block returned with paged responses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageResponse {
    pub limit: i32,
    pub page_number: i32,
    pub total_count: i32,
}
