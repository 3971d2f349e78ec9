// ============================================================================
// Transport Interface
// Contract for the collaborator that carries unary calls to the server
// ============================================================================

use crate::error::ApiResult;
use crate::proto::{
    BrokerReportRequest, BrokerReportResponse, GetAssetReportsRequest, GetAssetReportsResponse,
    GetConsensusForecastsRequest, GetConsensusForecastsResponse, GetDividendsForeignIssuerRequest,
    GetDividendsForeignIssuerResponse, GetOperationsByCursorRequest,
    GetOperationsByCursorResponse,
};
use async_trait::async_trait;

/// Wire method names, used in errors and log events.
pub mod methods {
    pub const GET_OPERATIONS_BY_CURSOR: &str = "OperationsService/GetOperationsByCursor";
    pub const GET_BROKER_REPORT: &str = "OperationsService/GetBrokerReport";
    pub const GET_DIVIDENDS_FOREIGN_ISSUER: &str = "OperationsService/GetDividendsForeignIssuer";
    pub const GET_CONSENSUS_FORECASTS: &str = "InstrumentsService/GetConsensusForecasts";
    pub const GET_ASSET_REPORTS: &str = "InstrumentsService/GetAssetReports";
}

/// Operations service calls. Channel setup, TLS, credentials and retry
/// belong to the implementation.
#[async_trait]
pub trait OperationsTransport: Send + Sync {
    async fn get_operations_by_cursor(
        &self,
        request: GetOperationsByCursorRequest,
    ) -> ApiResult<GetOperationsByCursorResponse>;

    /// Both phases of the broker report share one call; the request payload
    /// selects generate or fetch.
    async fn get_broker_report(&self, request: BrokerReportRequest)
        -> ApiResult<BrokerReportResponse>;

    async fn get_dividends_foreign_issuer(
        &self,
        request: GetDividendsForeignIssuerRequest,
    ) -> ApiResult<GetDividendsForeignIssuerResponse>;
}

/// Instruments service calls.
#[async_trait]
pub trait InstrumentsTransport: Send + Sync {
    async fn get_consensus_forecasts(
        &self,
        request: GetConsensusForecastsRequest,
    ) -> ApiResult<GetConsensusForecastsResponse>;

    async fn get_asset_reports(
        &self,
        request: GetAssetReportsRequest,
    ) -> ApiResult<GetAssetReportsResponse>;
}
