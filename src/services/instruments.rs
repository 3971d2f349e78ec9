// ============================================================================
// Instruments Service
// ============================================================================

use crate::client::Caller;
use crate::config::PagingConfig;
use crate::domain::{AssetReport, ConsensusForecast};
use crate::error::{ApiError, ApiResult};
use crate::interfaces::{methods, InstrumentsTransport};
use crate::paging::{Page, PageRequest, Pager};
use crate::proto;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Instrument reference data.
#[derive(Clone)]
pub struct InstrumentsService {
    transport: Arc<dyn InstrumentsTransport>,
    caller: Arc<Caller>,
    paging: PagingConfig,
}

impl InstrumentsService {
    pub(crate) fn new(
        transport: Arc<dyn InstrumentsTransport>,
        caller: Arc<Caller>,
        paging: PagingConfig,
    ) -> Self {
        Self {
            transport,
            caller,
            paging,
        }
    }

    /// Collect every consensus forecast.
    ///
    /// Pages of `PagingConfig::forecasts_page_size` are requested one after
    /// another until the server-reported total is reached. Any failure aborts
    /// the walk and nothing collected so far is returned.
    pub async fn get_consensus_forecasts(&self) -> ApiResult<Vec<ConsensusForecast>> {
        let first = PageRequest::first_page(self.paging.forecasts_page_size);

        Pager::from_config(&self.paging)
            .collect(first, |page| {
                let request = proto::GetConsensusForecastsRequest {
                    paging: Some(proto::Page {
                        limit: page.limit,
                        page_number: page.page_number().unwrap_or_default(),
                    }),
                };
                async move {
                    let response = self
                        .caller
                        .unary(
                            methods::GET_CONSENSUS_FORECASTS,
                            self.transport.get_consensus_forecasts(request),
                        )
                        .await?;
                    forecasts_page(response)
                }
            })
            .await
    }

    /// Reporting calendar of the instrument's issuer within `[from, to]`.
    pub async fn get_asset_reports(
        &self,
        instrument_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> ApiResult<Vec<AssetReport>> {
        if instrument_id.is_empty() {
            return Err(ApiError::InvalidArgument(
                "instrument id cannot be empty".to_string(),
            ));
        }
        if from > to {
            return Err(ApiError::InvalidArgument(format!(
                "period start {from} is after its end {to}"
            )));
        }

        let request = proto::GetAssetReportsRequest {
            instrument_id: instrument_id.to_string(),
            from: Some(from),
            to: Some(to),
        };

        let response = self
            .caller
            .unary(
                methods::GET_ASSET_REPORTS,
                self.transport.get_asset_reports(request),
            )
            .await?;

        Ok(response.events.into_iter().map(AssetReport::from).collect())
    }
}

fn forecasts_page(
    response: proto::GetConsensusForecastsResponse,
) -> ApiResult<Page<ConsensusForecast>> {
    let block = response.page.ok_or_else(|| {
        ApiError::decode(methods::GET_CONSENSUS_FORECASTS, "missing page block")
    })?;
    // Negative totals are treated as an empty result set
    let total_count = usize::try_from(block.total_count).unwrap_or(0);

    Ok(Page::with_total(
        response.items.into_iter().map(ConsensusForecast::from).collect(),
        total_count,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paging::PageMarker;

    #[test]
    fn test_forecasts_page() {
        let page = forecasts_page(proto::GetConsensusForecastsResponse {
            items: vec![proto::ConsensusForecastsItem::default()],
            page: Some(proto::PageResponse {
                limit: 10_000,
                page_number: 0,
                total_count: 1,
            }),
        })
        .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.marker, PageMarker::Total { total_count: 1 });
    }

    #[test]
    fn test_forecasts_page_requires_page_block() {
        let result = forecasts_page(proto::GetConsensusForecastsResponse::default());
        assert!(matches!(result, Err(ApiError::Decode { .. })));
    }

    #[test]
    fn test_negative_total_is_empty() {
        let page = forecasts_page(proto::GetConsensusForecastsResponse {
            items: Vec::new(),
            page: Some(proto::PageResponse {
                total_count: -5,
                ..Default::default()
            }),
        })
        .unwrap();
        assert_eq!(page.marker, PageMarker::Total { total_count: 0 });
    }
}
