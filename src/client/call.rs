// ============================================================================
// Unary Call Pipeline
// Deadline, tracking id and interceptor hooks around one transport call
// ============================================================================

use crate::error::{ApiError, ApiResult};
use crate::interfaces::{CallContext, InterceptorChain};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Wraps every outbound call made by the services.
#[derive(Debug)]
pub(crate) struct Caller {
    interceptors: Arc<InterceptorChain>,
    request_timeout: Option<Duration>,
}

impl Caller {
    pub(crate) fn new(
        interceptors: Arc<InterceptorChain>,
        request_timeout: Option<Duration>,
    ) -> Self {
        Self {
            interceptors,
            request_timeout,
        }
    }

    /// Await `call` under the configured deadline.
    ///
    /// Dropping the returned future before it completes reports
    /// `ApiError::Cancelled` to the interceptors.
    pub(crate) async fn unary<T, Fut>(&self, method: &'static str, call: Fut) -> ApiResult<T>
    where
        Fut: Future<Output = ApiResult<T>>,
    {
        let mut guard = CallGuard {
            context: CallContext::new(method),
            interceptors: &self.interceptors,
            finished: false,
        };

        debug!(method, tracking_id = %guard.context.tracking_id, "Unary call");
        self.interceptors.request(&guard.context);

        let outcome = match self.request_timeout {
            Some(timeout) => match tokio::time::timeout(timeout, call).await {
                Ok(result) => result,
                Err(_) => Err(ApiError::Timeout { method, timeout }),
            },
            None => call.await,
        };

        guard.finished = true;
        match &outcome {
            Ok(_) => self.interceptors.response(&guard.context),
            Err(error) => self.interceptors.error(&guard.context, error),
        }

        outcome
    }
}

struct CallGuard<'a> {
    context: CallContext,
    interceptors: &'a InterceptorChain,
    finished: bool,
}

impl Drop for CallGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            let error = ApiError::Cancelled {
                method: self.context.method,
            };
            self.interceptors.error(&self.context, &error);
        }
    }
}
