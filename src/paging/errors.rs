// ============================================================================
// Paging Errors
// ============================================================================

use thiserror::Error;

/// Protocol violations detected while walking a paginated result set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PagingError {
    /// Server returned no items although fewer than `total_count` were collected
    #[error("page {page} returned no items with {accumulated} of {total_count} collected")]
    EmptyPage {
        page: usize,
        accumulated: usize,
        total_count: usize,
    },

    /// Server reported more data but did not hand out a cursor
    #[error("page {page} reported more data without a next cursor")]
    MissingCursor { page: usize },

    /// Server handed back the cursor it was just given
    #[error("page {page} returned the cursor it was requested with")]
    StalledCursor { page: usize },

    /// Response marker does not match the request style
    #[error("page {page} answered a {requested} request with a {answered} marker")]
    StyleMismatch {
        page: usize,
        requested: &'static str,
        answered: &'static str,
    },

    /// Configured page ceiling reached before the result set was exhausted
    #[error("stopped after {max_pages} pages with {accumulated} items collected")]
    PageLimit { max_pages: usize, accumulated: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PagingError::EmptyPage {
            page: 2,
            accumulated: 20,
            total_count: 25,
        };
        assert_eq!(
            err.to_string(),
            "page 2 returned no items with 20 of 25 collected"
        );
    }
}
