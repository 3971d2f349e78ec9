// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod interceptor;
mod transport;

pub use interceptor::{
    CallContext, ClientInterceptor, InterceptorChain, LoggingInterceptor, NoOpInterceptor,
};
pub use transport::{methods, InstrumentsTransport, OperationsTransport};
