// ============================================================================
// Client Factory
// Creates API clients with proper configuration
// ============================================================================

use super::{Caller, InvestApiClient};
use crate::config::{ApiTarget, ClientConfig, ConnectionSettings};
use crate::error::ApiResult;
use crate::interfaces::{
    ClientInterceptor, InstrumentsTransport, InterceptorChain, OperationsTransport,
};
use crate::services::{InstrumentsService, OperationsService};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a client from configuration
///
/// # Arguments
/// * `config` - Client configuration
/// * `transport` - Carrier for both services' calls
///
/// # Returns
/// * `ApiResult<InvestApiClient>` - Configured client or `ApiError::Config`
pub fn create_from_config<T>(config: ClientConfig, transport: Arc<T>) -> ApiResult<InvestApiClient>
where
    T: OperationsTransport + InstrumentsTransport + 'static,
{
    build_client(config, transport.clone(), transport, InterceptorChain::new())
}

fn build_client(
    config: ClientConfig,
    operations: Arc<dyn OperationsTransport>,
    instruments: Arc<dyn InstrumentsTransport>,
    interceptors: InterceptorChain,
) -> ApiResult<InvestApiClient> {
    // Validate configuration first
    config.validate()?;

    let interceptors = Arc::new(interceptors);
    let caller = Arc::new(Caller::new(
        interceptors.clone(),
        config.connection.request_timeout,
    ));

    debug!(
        endpoint = %config.target,
        request_timeout = ?config.connection.request_timeout,
        interceptors = interceptors.len(),
        "Creating API client"
    );

    let operations = OperationsService::new(operations, caller.clone(), config.paging.clone());
    let instruments = InstrumentsService::new(instruments, caller, config.paging.clone());

    Ok(InvestApiClient::new(
        config,
        interceptors,
        operations,
        instruments,
    ))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating clients with fluent API
///
/// # Example
/// ```ignore
/// let client = InvestApiClientBuilder::sandbox()
///     .with_request_timeout(Duration::from_secs(10))
///     .with_interceptor(Arc::new(LoggingInterceptor))
///     .build(Arc::new(transport))?;
/// ```
pub struct InvestApiClientBuilder {
    config: ClientConfig,
    interceptors: InterceptorChain,
}

impl InvestApiClientBuilder {
    /// Create a new builder for the specified endpoint
    pub fn new(target: ApiTarget) -> Self {
        Self::from_config(ClientConfig::new(target))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self {
            config,
            interceptors: InterceptorChain::new(),
        }
    }

    // ========================================================================
    // Endpoint Presets
    // ========================================================================

    pub fn production() -> Self {
        Self::new(ApiTarget::production())
    }

    pub fn sandbox() -> Self {
        Self::new(ApiTarget::sandbox())
    }

    pub fn with_target(mut self, target: ApiTarget) -> Self {
        self.config.target = target;
        self
    }

    // ========================================================================
    // Connection and Paging
    // ========================================================================

    pub fn with_connection(mut self, connection: ConnectionSettings) -> Self {
        self.config.connection = connection;
        self
    }

    /// Set the per-call deadline
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.config.connection.request_timeout = Some(timeout);
        self
    }

    pub fn with_forecasts_page_size(mut self, size: i32) -> Self {
        self.config.paging.forecasts_page_size = size;
        self
    }

    /// Default `limit` for operations-by-cursor requests
    pub fn with_operations_limit(mut self, limit: i32) -> Self {
        self.config.paging.operations_limit = limit;
        self
    }

    /// Abort page-number walks after `max_pages` requests
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.config.paging.max_pages = Some(max_pages);
        self
    }

    pub fn with_interceptor(self, interceptor: Arc<dyn ClientInterceptor>) -> Self {
        self.interceptors.add(interceptor);
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the client over a transport serving both services
    pub fn build<T>(self, transport: Arc<T>) -> ApiResult<InvestApiClient>
    where
        T: OperationsTransport + InstrumentsTransport + 'static,
    {
        build_client(self.config, transport.clone(), transport, self.interceptors)
    }

    /// Build the client with a separate transport per service
    pub fn build_with(
        self,
        operations: Arc<dyn OperationsTransport>,
        instruments: Arc<dyn InstrumentsTransport>,
    ) -> ApiResult<InvestApiClient> {
        build_client(self.config, operations, instruments, self.interceptors)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ClientConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::config::ConfigError;
    use crate::error::ApiError;
    use crate::interfaces::{LoggingInterceptor, NoOpInterceptor};

    #[test]
    fn test_create_from_config() {
        let client =
            create_from_config(ClientConfig::sandbox(), Arc::new(MockTransport::default()))
                .unwrap();
        assert!(client.config().target.is_sandbox());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ClientConfig::new(ApiTarget::new("", 443));
        let result = create_from_config(config, Arc::new(MockTransport::default()));
        assert!(matches!(
            result,
            Err(ApiError::Config(ConfigError::MissingField { .. }))
        ));
    }

    #[test]
    fn test_builder_pattern() {
        let builder = InvestApiClientBuilder::production()
            .with_request_timeout(Duration::from_secs(5))
            .with_forecasts_page_size(500)
            .with_operations_limit(250)
            .with_max_pages(40)
            .with_interceptor(Arc::new(NoOpInterceptor))
            .with_interceptor(Arc::new(LoggingInterceptor));

        let config = builder.get_config();
        assert_eq!(config.connection.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.paging.forecasts_page_size, 500);
        assert_eq!(config.paging.operations_limit, 250);
        assert_eq!(config.paging.max_pages, Some(40));

        let client = builder.build(Arc::new(MockTransport::default())).unwrap();
        assert_eq!(client.config().target, ApiTarget::production());
    }

    #[test]
    fn test_builder_rejects_bad_paging() {
        let result = InvestApiClientBuilder::sandbox()
            .with_operations_limit(5_000)
            .build(Arc::new(MockTransport::default()));
        assert!(matches!(
            result,
            Err(ApiError::Config(ConfigError::InvalidValue {
                field: "paging.operations_limit",
                ..
            }))
        ));
    }

    #[test]
    fn test_separate_transports() {
        let operations = Arc::new(MockTransport::default());
        let instruments = Arc::new(MockTransport::default());
        let client = InvestApiClientBuilder::sandbox()
            .build_with(operations, instruments)
            .unwrap();
        assert!(client.config().target.is_sandbox());
    }
}
