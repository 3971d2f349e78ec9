// ============================================================================
// Paging Module
// Cursor-token and page-number pagination over a request/response call
// ============================================================================
//
// Two styles share one driver:
// - Cursor: opaque server cursor plus `has_next`, passed back verbatim
// - Page number: zero-based index plus a server-reported `total_count`
//
// The driver issues one call at a time and never returns partial results.

mod errors;
mod page;
mod pager;

pub use errors::PagingError;
pub use page::{CursorState, Page, PageMarker, PageRequest};
pub use pager::Pager;
