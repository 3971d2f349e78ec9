// ============================================================================
// Client Module
// Entry point bundling the services over one transport
// ============================================================================

mod call;
pub mod factory;
#[cfg(test)]
pub(crate) mod mock;

pub(crate) use call::Caller;
pub use factory::{create_from_config, InvestApiClientBuilder};

use crate::config::ClientConfig;
use crate::interfaces::{ClientInterceptor, InterceptorChain};
use crate::services::{InstrumentsService, OperationsService};
use std::sync::Arc;

/// API client. Cheap to share behind an `Arc`; services can be cloned out.
pub struct InvestApiClient {
    config: ClientConfig,
    interceptors: Arc<InterceptorChain>,
    operations: OperationsService,
    instruments: InstrumentsService,
}

impl InvestApiClient {
    pub(crate) fn new(
        config: ClientConfig,
        interceptors: Arc<InterceptorChain>,
        operations: OperationsService,
        instruments: InstrumentsService,
    ) -> Self {
        Self {
            config,
            interceptors,
            operations,
            instruments,
        }
    }

    pub fn operations(&self) -> &OperationsService {
        &self.operations
    }

    pub fn instruments(&self) -> &InstrumentsService {
        &self.instruments
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Register an interceptor; it sees every call started afterwards.
    pub fn add_interceptor(&self, interceptor: Arc<dyn ClientInterceptor>) {
        self.interceptors.add(interceptor);
    }
}

impl std::fmt::Debug for InvestApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvestApiClient")
            .field("target", &self.config.target)
            .field("interceptors", &self.interceptors)
            .finish()
    }
}
