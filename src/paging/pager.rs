// ============================================================================
// Pager
// Flattens a server-paginated result set into one ordered sequence
// ============================================================================

use super::errors::PagingError;
use super::page::{CursorState, Page, PageMarker, PageRequest};
use crate::config::PagingConfig;
use std::future::Future;
use tracing::debug;

/// Drives a paginated walk, one request at a time.
///
/// The termination predicate comes from the response marker:
/// - `PageMarker::Total`: stop once `accumulated >= total_count`, otherwise
///   request the next page number
/// - `PageMarker::Cursor`: stop once `has_next` is false, otherwise pass the
///   server cursor back verbatim
///
/// At least one request is always issued. Items keep server order and are not
/// deduplicated. The first error from `fetch` aborts the walk and is returned
/// as is; the items collected so far are dropped with the future.
///
/// # Example
/// ```text
/// total_count = 25, limit = 10
///
/// page 0 -> 10 items (10 < 25, continue)
/// page 1 -> 10 items (20 < 25, continue)
/// page 2 ->  5 items (25 >= 25, done)
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Pager {
    max_pages: Option<usize>,
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &PagingConfig) -> Self {
        Self {
            max_pages: config.max_pages,
        }
    }

    /// Abort with `PagingError::PageLimit` instead of issuing more than `max_pages` requests
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Walk the result set starting at `first`, calling `fetch` once per page.
    pub async fn collect<T, E, F, Fut>(&self, first: PageRequest, mut fetch: F) -> Result<Vec<T>, E>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<Page<T>, E>>,
        E: From<PagingError>,
    {
        let mut request = first;
        let mut accumulated = Vec::new();
        let mut page_index = 0usize;

        loop {
            if let Some(max_pages) = self.max_pages {
                if page_index >= max_pages {
                    return Err(PagingError::PageLimit {
                        max_pages,
                        accumulated: accumulated.len(),
                    }
                    .into());
                }
            }

            let page = fetch(request.clone()).await?;
            let received = page.items.len();
            accumulated.extend(page.items);

            debug!(
                page = page_index,
                received,
                accumulated = accumulated.len(),
                "Fetched page"
            );

            match next_state(
                &request.state,
                page.marker,
                page_index,
                received,
                accumulated.len(),
            )? {
                Some(state) => request.state = state,
                None => return Ok(accumulated),
            }

            page_index += 1;
        }
    }
}

fn next_state(
    current: &CursorState,
    marker: PageMarker,
    page: usize,
    received: usize,
    accumulated: usize,
) -> Result<Option<CursorState>, PagingError> {
    match (current, marker) {
        (CursorState::Index { page_number }, PageMarker::Total { total_count }) => {
            if accumulated >= total_count {
                Ok(None)
            } else if received == 0 {
                Err(PagingError::EmptyPage {
                    page,
                    accumulated,
                    total_count,
                })
            } else {
                Ok(Some(CursorState::Index {
                    page_number: page_number + 1,
                }))
            }
        },
        (
            CursorState::Token(cursor),
            PageMarker::Cursor {
                next_cursor,
                has_next,
            },
        ) => {
            if !has_next {
                Ok(None)
            } else if next_cursor.is_empty() {
                Err(PagingError::MissingCursor { page })
            } else if next_cursor == *cursor {
                Err(PagingError::StalledCursor { page })
            } else {
                Ok(Some(CursorState::Token(next_cursor)))
            }
        },
        (current, marker) => Err(PagingError::StyleMismatch {
            page,
            requested: current.style(),
            answered: marker.style(),
        }),
    }
}
