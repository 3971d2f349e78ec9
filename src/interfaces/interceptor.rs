// ============================================================================
// Client Interceptor Interface
// Hooks observing every unary call made by the client
// ============================================================================

use crate::error::ApiError;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-call metadata shared by all interceptor hooks of one call.
#[derive(Debug, Clone)]
pub struct CallContext {
    pub method: &'static str,
    /// Correlates request, response and error events of one call
    pub tracking_id: Uuid,
    pub started: Instant,
}

impl CallContext {
    pub fn new(method: &'static str) -> Self {
        Self {
            method,
            tracking_id: Uuid::new_v4(),
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Observer for outbound calls.
/// Implementations can handle logging, metrics, auditing, etc.
pub trait ClientInterceptor: Send + Sync {
    /// Called before the request reaches the transport
    fn on_request(&self, context: &CallContext);

    /// Called after a successful response
    fn on_response(&self, _context: &CallContext) {}

    /// Called when the call fails, times out or is rejected
    fn on_error(&self, _context: &CallContext, _error: &ApiError) {}
}

/// No-op interceptor for testing
pub struct NoOpInterceptor;

impl ClientInterceptor for NoOpInterceptor {
    fn on_request(&self, _context: &CallContext) {}
}

/// Logging interceptor
pub struct LoggingInterceptor;

impl ClientInterceptor for LoggingInterceptor {
    fn on_request(&self, context: &CallContext) {
        tracing::debug!(
            method = context.method,
            tracking_id = %context.tracking_id,
            "Sending request"
        );
    }

    fn on_response(&self, context: &CallContext) {
        tracing::debug!(
            method = context.method,
            tracking_id = %context.tracking_id,
            elapsed_ms = context.elapsed().as_millis() as u64,
            "Received response"
        );
    }

    fn on_error(&self, context: &CallContext, error: &ApiError) {
        tracing::warn!(
            method = context.method,
            tracking_id = %context.tracking_id,
            error = %error,
            "Call failed"
        );
    }
}

/// Ordered set of interceptors, invoked in registration order.
#[derive(Default)]
pub struct InterceptorChain {
    interceptors: RwLock<Vec<Arc<dyn ClientInterceptor>>>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, interceptor: Arc<dyn ClientInterceptor>) {
        self.interceptors.write().push(interceptor);
    }

    pub fn len(&self) -> usize {
        self.interceptors.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.read().is_empty()
    }

    pub(crate) fn request(&self, context: &CallContext) {
        for interceptor in self.snapshot() {
            interceptor.on_request(context);
        }
    }

    pub(crate) fn response(&self, context: &CallContext) {
        for interceptor in self.snapshot() {
            interceptor.on_response(context);
        }
    }

    pub(crate) fn error(&self, context: &CallContext, error: &ApiError) {
        for interceptor in self.snapshot() {
            interceptor.on_error(context, error);
        }
    }

    // Hooks run without the lock held, so they may register interceptors.
    fn snapshot(&self) -> Vec<Arc<dyn ClientInterceptor>> {
        self.interceptors.read().clone()
    }
}

impl std::fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        events: Mutex<Vec<String>>,
    }

    impl ClientInterceptor for Recorder {
        fn on_request(&self, context: &CallContext) {
            self.events.lock().push(format!("request {}", context.method));
        }

        fn on_error(&self, context: &CallContext, _error: &ApiError) {
            self.events.lock().push(format!("error {}", context.method));
        }
    }

    #[test]
    fn test_chain_invokes_in_order() {
        let chain = InterceptorChain::new();
        let recorder = Arc::new(Recorder::default());
        chain.add(Arc::new(NoOpInterceptor));
        chain.add(recorder.clone());
        assert_eq!(chain.len(), 2);

        let context = CallContext::new("OperationsService/GetBrokerReport");
        chain.request(&context);
        chain.response(&context);
        chain.error(&context, &ApiError::InvalidArgument("page".to_string()));

        assert_eq!(
            *recorder.events.lock(),
            vec![
                "request OperationsService/GetBrokerReport".to_string(),
                "error OperationsService/GetBrokerReport".to_string(),
            ]
        );
    }

    struct Registrar {
        chain: std::sync::Weak<InterceptorChain>,
    }

    impl ClientInterceptor for Registrar {
        fn on_request(&self, _context: &CallContext) {
            if let Some(chain) = self.chain.upgrade() {
                chain.add(Arc::new(NoOpInterceptor));
            }
        }
    }

    #[test]
    fn test_hook_can_register_interceptor() {
        let chain = Arc::new(InterceptorChain::new());
        chain.add(Arc::new(Registrar {
            chain: Arc::downgrade(&chain),
        }));

        let context = CallContext::new("InstrumentsService/GetAssetReports");
        chain.request(&context);
        assert_eq!(chain.len(), 2);

        chain.request(&context);
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_tracking_ids_are_unique() {
        let a = CallContext::new("m");
        let b = CallContext::new("m");
        assert_ne!(a.tracking_id, b.tracking_id);
    }
}
