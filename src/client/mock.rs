// ============================================================================
// Scripted Transport
// In-memory transport replaying queued responses, for tests
// ============================================================================

use crate::error::{ApiError, ApiResult, StatusCode};
use crate::interfaces::{InstrumentsTransport, OperationsTransport};
use crate::proto::{
    BrokerReportRequest, BrokerReportResponse, GetAssetReportsRequest, GetAssetReportsResponse,
    GetConsensusForecastsRequest, GetConsensusForecastsResponse, GetDividendsForeignIssuerRequest,
    GetDividendsForeignIssuerResponse, GetOperationsByCursorRequest,
    GetOperationsByCursorResponse,
};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Duration;

/// Requests seen and responses still to hand out for one method.
pub(crate) struct Script<Req, Resp> {
    requests: Mutex<Vec<Req>>,
    responses: Mutex<VecDeque<ApiResult<Resp>>>,
}

impl<Req, Resp> Default for Script<Req, Resp> {
    fn default() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        }
    }
}

impl<Req: Clone, Resp> Script<Req, Resp> {
    pub fn push(&self, response: ApiResult<Resp>) {
        self.responses.lock().push_back(response);
    }

    pub fn requests(&self) -> Vec<Req> {
        self.requests.lock().clone()
    }

    fn next(&self, method: &'static str, request: Req) -> ApiResult<Resp> {
        self.requests.lock().push(request);
        self.responses.lock().pop_front().unwrap_or_else(|| {
            Err(ApiError::transport(
                method,
                StatusCode::Unavailable,
                "no scripted response",
            ))
        })
    }
}

#[derive(Default)]
pub(crate) struct MockTransport {
    pub operations: Script<GetOperationsByCursorRequest, GetOperationsByCursorResponse>,
    pub broker_reports: Script<BrokerReportRequest, BrokerReportResponse>,
    pub dividends: Script<GetDividendsForeignIssuerRequest, GetDividendsForeignIssuerResponse>,
    pub forecasts: Script<GetConsensusForecastsRequest, GetConsensusForecastsResponse>,
    pub asset_reports: Script<GetAssetReportsRequest, GetAssetReportsResponse>,
    /// Simulated latency applied to every call
    pub latency: Option<Duration>,
}

impl MockTransport {
    async fn delay(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl OperationsTransport for MockTransport {
    async fn get_operations_by_cursor(
        &self,
        request: GetOperationsByCursorRequest,
    ) -> ApiResult<GetOperationsByCursorResponse> {
        let response = self.operations.next("GetOperationsByCursor", request);
        self.delay().await;
        response
    }

    async fn get_broker_report(
        &self,
        request: BrokerReportRequest,
    ) -> ApiResult<BrokerReportResponse> {
        let response = self.broker_reports.next("GetBrokerReport", request);
        self.delay().await;
        response
    }

    async fn get_dividends_foreign_issuer(
        &self,
        request: GetDividendsForeignIssuerRequest,
    ) -> ApiResult<GetDividendsForeignIssuerResponse> {
        let response = self.dividends.next("GetDividendsForeignIssuer", request);
        self.delay().await;
        response
    }
}

#[async_trait]
impl InstrumentsTransport for MockTransport {
    async fn get_consensus_forecasts(
        &self,
        request: GetConsensusForecastsRequest,
    ) -> ApiResult<GetConsensusForecastsResponse> {
        let response = self.forecasts.next("GetConsensusForecasts", request);
        self.delay().await;
        response
    }

    async fn get_asset_reports(
        &self,
        request: GetAssetReportsRequest,
    ) -> ApiResult<GetAssetReportsResponse> {
        let response = self.asset_reports.next("GetAssetReports", request);
        self.delay().await;
        response
    }
}
