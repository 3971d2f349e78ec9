// ============================================================================
// Invest API Client Library
// Typed async client with fixed-point quotations and paginated retrieval
// ============================================================================

//! # Invest API
//!
//! A typed client for the Invest brokerage API.
//!
//! ## Features
//!
//! - **Fixed-point quotations** (`units` + `nano`) with exact percentage and
//!   price-step arithmetic
//! - **Pagination driver** flattening cursor and page-number result sets
//! - **Pluggable transport** behind async traits, with per-call deadlines
//!   and interceptors
//! - **Declarative wire mapping** from protocol messages to domain models
//!
//! ## Example
//!
//! ```rust
//! use invest_api::prelude::*;
//!
//! // Stop price 3% below the last trade, on a 0.01 price step
//! let last = Quotation::from_f64(101.25);
//! let step = Quotation::new(0, 10_000_000);
//! let stop = last.decrease_by_with_step(3.0, step, RoundingMode::Down);
//!
//! assert_eq!(stop, Quotation::new(98, 210_000_000));
//! assert_eq!(stop.to_string(), "98.210000000");
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod interfaces;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;
pub mod paging;
pub mod proto;
pub mod services;

// Re-exports for convenience
pub mod prelude {
    pub use crate::client::{create_from_config, InvestApiClient, InvestApiClientBuilder};
    pub use crate::config::{ApiTarget, ClientConfig, ConnectionSettings, PagingConfig};
    pub use crate::domain::{
        AssetReport, AssetReportPeriodType, BrokerReport, BrokerReportItem, ConsensusForecast,
        DividendsForeignIssuerItem, DividendsForeignIssuerReport, GeneratedReport, OperationItem,
        OperationState, OperationType, OperationsByCursor, OperationsCursorRequest,
        Recommendation,
    };
    pub use crate::error::{ApiError, ApiResult, StatusCode};
    pub use crate::interfaces::{
        ClientInterceptor, InstrumentsTransport, LoggingInterceptor, NoOpInterceptor,
        OperationsTransport,
    };
    pub use crate::numeric::{MoneyValue, NumericError, Quotation, RoundingMode};
    pub use crate::paging::{Page, PageRequest, Pager, PagingError};
    pub use crate::services::{InstrumentsService, OperationsService};
}
