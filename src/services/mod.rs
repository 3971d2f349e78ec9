// ============================================================================
// Services Module
// One async method per remote operation
// ============================================================================

mod instruments;
mod operations;

pub use instruments::InstrumentsService;
pub use operations::OperationsService;
