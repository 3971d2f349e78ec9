// ============================================================================
// Paging Configuration
// ============================================================================

use super::errors::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Page size used by the consensus forecast walk
pub const DEFAULT_FORECASTS_PAGE_SIZE: i32 = 10_000;
/// Default `limit` of an operations-by-cursor request
pub const DEFAULT_OPERATIONS_LIMIT: i32 = 100;
/// Largest `limit` the operations-by-cursor call accepts
pub const MAX_OPERATIONS_LIMIT: i32 = 1_000;

/// Page sizes and walk limits for paginated calls.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PagingConfig {
    /// Items requested per page when collecting consensus forecasts
    pub forecasts_page_size: i32,

    /// Default `limit` for operations-by-cursor requests that do not set one
    pub operations_limit: i32,

    /// Upper bound accepted for an operations-by-cursor `limit`
    pub operations_max_limit: i32,

    /// Optional: Abort a page-number walk after this many requests
    /// None means walk until the server-reported total is reached
    pub max_pages: Option<usize>,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            forecasts_page_size: DEFAULT_FORECASTS_PAGE_SIZE,
            operations_limit: DEFAULT_OPERATIONS_LIMIT,
            operations_max_limit: MAX_OPERATIONS_LIMIT,
            max_pages: None,
        }
    }
}

impl PagingConfig {
    pub fn with_forecasts_page_size(mut self, size: i32) -> Self {
        self.forecasts_page_size = size;
        self
    }

    pub fn with_operations_limit(mut self, limit: i32) -> Self {
        self.operations_limit = limit;
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.forecasts_page_size <= 0 {
            return Err(ConfigError::invalid(
                "paging.forecasts_page_size",
                "must be positive",
            ));
        }

        if self.operations_max_limit <= 0 {
            return Err(ConfigError::invalid(
                "paging.operations_max_limit",
                "must be positive",
            ));
        }

        if self.operations_limit <= 0 || self.operations_limit > self.operations_max_limit {
            return Err(ConfigError::invalid(
                "paging.operations_limit",
                format!("must be within 1..={}", self.operations_max_limit),
            ));
        }

        if self.max_pages == Some(0) {
            return Err(ConfigError::invalid(
                "paging.max_pages",
                "must allow at least one page",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PagingConfig::default();
        assert_eq!(config.forecasts_page_size, 10_000);
        assert_eq!(config.operations_limit, 100);
        assert_eq!(config.operations_max_limit, 1_000);
        assert_eq!(config.max_pages, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(PagingConfig::default()
            .with_forecasts_page_size(0)
            .validate()
            .is_err());
        assert!(PagingConfig::default()
            .with_operations_limit(1_001)
            .validate()
            .is_err());
        assert!(PagingConfig::default().with_max_pages(0).validate().is_err());
        assert!(PagingConfig::default().with_max_pages(5).validate().is_ok());
    }
}
