// ============================================================================
// Operations Service
// Cursor-paginated operations and generate-then-fetch reports
// ============================================================================

use crate::client::Caller;
use crate::config::PagingConfig;
use crate::domain::{
    BrokerReport, DividendsForeignIssuerReport, GeneratedReport, OperationItem,
    OperationsByCursor, OperationsCursorRequest,
};
use crate::error::{ApiError, ApiResult};
use crate::interfaces::{methods, OperationsTransport};
use crate::paging::{Page, PageRequest, Pager};
use crate::proto;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

/// Account operations and reports.
#[derive(Clone)]
pub struct OperationsService {
    transport: Arc<dyn OperationsTransport>,
    caller: Arc<Caller>,
    paging: PagingConfig,
}

impl OperationsService {
    pub(crate) fn new(
        transport: Arc<dyn OperationsTransport>,
        caller: Arc<Caller>,
        paging: PagingConfig,
    ) -> Self {
        Self {
            transport,
            caller,
            paging,
        }
    }

    /// Fetch one page of operations.
    ///
    /// Pass `next_cursor` of the result back through
    /// `OperationsCursorRequest::with_cursor` while `has_next` is set.
    pub async fn get_operations_by_cursor(
        &self,
        request: OperationsCursorRequest,
    ) -> ApiResult<OperationsByCursor> {
        let wire = self.operations_request(request)?;
        let response = self
            .caller
            .unary(
                methods::GET_OPERATIONS_BY_CURSOR,
                self.transport.get_operations_by_cursor(wire),
            )
            .await?;

        Ok(response.into())
    }

    /// Follow the cursor until the server reports no more pages and return
    /// every operation in server order.
    pub async fn get_all_operations(
        &self,
        request: OperationsCursorRequest,
    ) -> ApiResult<Vec<OperationItem>> {
        let wire = self.operations_request(request)?;
        let first = PageRequest::from_cursor(wire.cursor.clone(), wire.limit);

        Pager::from_config(&self.paging)
            .collect(first, |page| {
                let wire = proto::GetOperationsByCursorRequest {
                    cursor: page.cursor().unwrap_or_default().to_string(),
                    ..wire.clone()
                };
                async move {
                    let response = self
                        .caller
                        .unary(
                            methods::GET_OPERATIONS_BY_CURSOR,
                            self.transport.get_operations_by_cursor(wire),
                        )
                        .await?;
                    Ok::<_, ApiError>(Page::from(OperationsByCursor::from(response)))
                }
            })
            .await
    }

    /// Request a broker report for `[from, to]`.
    pub async fn generate_broker_report(
        &self,
        account_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ApiResult<GeneratedReport<BrokerReport>> {
        validate_account(account_id)?;
        validate_period(from, to)?;

        let request = proto::BrokerReportRequest {
            payload: Some(proto::BrokerReportPayload::GenerateBrokerReportRequest(
                proto::GenerateBrokerReportRequest {
                    account_id: account_id.to_string(),
                    from: Some(from),
                    to: Some(to),
                },
            )),
        };

        let response = self
            .caller
            .unary(
                methods::GET_BROKER_REPORT,
                self.transport.get_broker_report(request),
            )
            .await?;

        let task_id = response
            .generate_broker_report_response
            .map(|generated| generated.task_id);
        let report = response.get_broker_report_response.map(BrokerReport::from);
        generated(methods::GET_BROKER_REPORT, task_id, report)
    }

    /// Fetch page `page` (zero-based) of a generated broker report.
    pub async fn get_broker_report(&self, task_id: &str, page: i32) -> ApiResult<BrokerReport> {
        validate_task(task_id, page)?;

        let request = proto::BrokerReportRequest {
            payload: Some(proto::BrokerReportPayload::GetBrokerReportRequest(
                proto::GetBrokerReportRequest {
                    task_id: task_id.to_string(),
                    page,
                },
            )),
        };

        let response = self
            .caller
            .unary(
                methods::GET_BROKER_REPORT,
                self.transport.get_broker_report(request),
            )
            .await?;

        response
            .get_broker_report_response
            .map(BrokerReport::from)
            .ok_or_else(|| ApiError::decode(methods::GET_BROKER_REPORT, "missing report page"))
    }

    /// Request a foreign issuer dividends report for `[from, to]`.
    pub async fn generate_div_foreign_issuer_report(
        &self,
        account_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ApiResult<GeneratedReport<DividendsForeignIssuerReport>> {
        validate_account(account_id)?;
        validate_period(from, to)?;

        let request = proto::GetDividendsForeignIssuerRequest {
            payload: Some(
                proto::DividendsForeignIssuerPayload::GenerateDivForeignIssuerReport(
                    proto::GenerateDividendsForeignIssuerReportRequest {
                        account_id: account_id.to_string(),
                        from: Some(from),
                        to: Some(to),
                    },
                ),
            ),
        };

        let response = self
            .caller
            .unary(
                methods::GET_DIVIDENDS_FOREIGN_ISSUER,
                self.transport.get_dividends_foreign_issuer(request),
            )
            .await?;

        let task_id = response
            .generate_div_foreign_issuer_report_response
            .map(|generated| generated.task_id);
        let report = response
            .div_foreign_issuer_report
            .map(DividendsForeignIssuerReport::from);
        generated(methods::GET_DIVIDENDS_FOREIGN_ISSUER, task_id, report)
    }

    /// Fetch page `page` (zero-based) of a generated dividends report.
    pub async fn get_div_foreign_issuer_report(
        &self,
        task_id: &str,
        page: i32,
    ) -> ApiResult<DividendsForeignIssuerReport> {
        validate_task(task_id, page)?;

        let request = proto::GetDividendsForeignIssuerRequest {
            payload: Some(proto::DividendsForeignIssuerPayload::GetDivForeignIssuerReport(
                proto::GetDividendsForeignIssuerReportRequest {
                    task_id: task_id.to_string(),
                    page,
                },
            )),
        };

        let response = self
            .caller
            .unary(
                methods::GET_DIVIDENDS_FOREIGN_ISSUER,
                self.transport.get_dividends_foreign_issuer(request),
            )
            .await?;

        response
            .div_foreign_issuer_report
            .map(DividendsForeignIssuerReport::from)
            .ok_or_else(|| {
                ApiError::decode(methods::GET_DIVIDENDS_FOREIGN_ISSUER, "missing report page")
            })
    }

    fn operations_request(
        &self,
        request: OperationsCursorRequest,
    ) -> ApiResult<proto::GetOperationsByCursorRequest> {
        validate_account(&request.account_id)?;
        if let (Some(from), Some(to)) = (request.from, request.to) {
            validate_period(from, to)?;
        }

        let limit = request.limit.unwrap_or(self.paging.operations_limit);
        if limit <= 0 || limit > self.paging.operations_max_limit {
            return Err(ApiError::InvalidArgument(format!(
                "limit {} outside 1..={}",
                limit, self.paging.operations_max_limit
            )));
        }

        Ok(request.into_wire(limit))
    }
}

fn generated<R>(
    method: &'static str,
    task_id: Option<String>,
    report: Option<R>,
) -> ApiResult<GeneratedReport<R>> {
    match (task_id, report) {
        (None, None) => Err(ApiError::decode(method, "neither task id nor report returned")),
        (task_id, report) => {
            let task_id = task_id.unwrap_or_default();
            debug!(method, task_id = %task_id, ready = report.is_some(), "Report requested");
            Ok(GeneratedReport { task_id, report })
        },
    }
}

fn validate_account(account_id: &str) -> ApiResult<()> {
    if account_id.is_empty() {
        return Err(ApiError::InvalidArgument(
            "account id cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_period(from: DateTime<Utc>, to: DateTime<Utc>) -> ApiResult<()> {
    if from > to {
        return Err(ApiError::InvalidArgument(format!(
            "period start {from} is after its end {to}"
        )));
    }
    Ok(())
}

fn validate_task(task_id: &str, page: i32) -> ApiResult<()> {
    if task_id.is_empty() {
        return Err(ApiError::InvalidArgument(
            "task id cannot be empty".to_string(),
        ));
    }
    if page < 0 {
        return Err(ApiError::InvalidArgument(format!(
            "page {page} cannot be negative"
        )));
    }
    Ok(())
}
