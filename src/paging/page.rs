// ============================================================================
// Page Types
// Request state and response markers for both pagination styles
// ============================================================================

/// Position in a paginated result set, mutated once per round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorState {
    /// Opaque server-issued cursor; empty means "from the start"
    Token(String),
    /// Zero-based page index
    Index { page_number: i32 },
}

impl CursorState {
    pub(crate) fn style(&self) -> &'static str {
        match self {
            CursorState::Token(_) => "cursor",
            CursorState::Index { .. } => "page-number",
        }
    }
}

/// One page request: where to read from and how many items to ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub state: CursorState,
    pub limit: i32,
}

impl PageRequest {
    /// First page of a page-number walk.
    pub fn first_page(limit: i32) -> Self {
        Self {
            state: CursorState::Index { page_number: 0 },
            limit,
        }
    }

    /// Start of a cursor walk, or resume from `cursor`.
    pub fn from_cursor(cursor: impl Into<String>, limit: i32) -> Self {
        Self {
            state: CursorState::Token(cursor.into()),
            limit,
        }
    }

    pub fn page_number(&self) -> Option<i32> {
        match self.state {
            CursorState::Index { page_number } => Some(page_number),
            CursorState::Token(_) => None,
        }
    }

    pub fn cursor(&self) -> Option<&str> {
        match &self.state {
            CursorState::Token(cursor) => Some(cursor),
            CursorState::Index { .. } => None,
        }
    }
}

/// What a response says about the rest of the result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMarker {
    /// Cursor style: continue with `next_cursor` while `has_next`
    Cursor { next_cursor: String, has_next: bool },
    /// Page-number style: continue while fewer than `total_count` items are collected
    Total { total_count: usize },
}

impl PageMarker {
    pub(crate) fn style(&self) -> &'static str {
        match self {
            PageMarker::Cursor { .. } => "cursor",
            PageMarker::Total { .. } => "page-number",
        }
    }
}

/// One page of items in server order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub marker: PageMarker,
}

impl<T> Page<T> {
    pub fn with_total(items: Vec<T>, total_count: usize) -> Self {
        Self {
            items,
            marker: PageMarker::Total { total_count },
        }
    }

    pub fn with_cursor(items: Vec<T>, next_cursor: impl Into<String>, has_next: bool) -> Self {
        Self {
            items,
            marker: PageMarker::Cursor {
                next_cursor: next_cursor.into(),
                has_next,
            },
        }
    }

    /// Map items, keeping the marker.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            marker: self.marker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accessors() {
        let first = PageRequest::first_page(10_000);
        assert_eq!(first.page_number(), Some(0));
        assert_eq!(first.cursor(), None);
        assert_eq!(first.limit, 10_000);

        let resume = PageRequest::from_cursor("abc", 100);
        assert_eq!(resume.cursor(), Some("abc"));
        assert_eq!(resume.page_number(), None);
    }

    #[test]
    fn test_page_map_keeps_marker() {
        let page = Page::with_total(vec![1, 2, 3], 7).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20, 30]);
        assert_eq!(page.marker, PageMarker::Total { total_count: 7 });
    }
}
