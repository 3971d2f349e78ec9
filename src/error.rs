// ============================================================================
// API Errors
// Error taxonomy surfaced by services and the client
// ============================================================================

use crate::config::ConfigError;
use crate::numeric::NumericError;
use crate::paging::PagingError;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// gRPC-style status code reported by the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    Cancelled,
    Unknown,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Internal,
    Unavailable,
    Unauthenticated,
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusCode::Cancelled => "CANCELLED",
            StatusCode::Unknown => "UNKNOWN",
            StatusCode::InvalidArgument => "INVALID_ARGUMENT",
            StatusCode::DeadlineExceeded => "DEADLINE_EXCEEDED",
            StatusCode::NotFound => "NOT_FOUND",
            StatusCode::PermissionDenied => "PERMISSION_DENIED",
            StatusCode::ResourceExhausted => "RESOURCE_EXHAUSTED",
            StatusCode::FailedPrecondition => "FAILED_PRECONDITION",
            StatusCode::Internal => "INTERNAL",
            StatusCode::Unavailable => "UNAVAILABLE",
            StatusCode::Unauthenticated => "UNAUTHENTICATED",
        };
        f.write_str(name)
    }
}

/// Errors returned by API calls.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network or server failure reported by the transport
    #[error("{method} failed with {code}: {message}")]
    Transport {
        method: &'static str,
        code: StatusCode,
        message: String,
    },

    /// Response is missing a required block or field
    #[error("malformed {method} response: {reason}")]
    Decode {
        method: &'static str,
        reason: String,
    },

    #[error("{method} did not complete within {timeout:?}")]
    Timeout {
        method: &'static str,
        timeout: Duration,
    },

    #[error("{method} was cancelled")]
    Cancelled { method: &'static str },

    /// Rejected locally before reaching the transport
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Paging(#[from] PagingError),

    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Transport failure helper for transport implementations.
    pub fn transport(method: &'static str, code: StatusCode, message: impl Into<String>) -> Self {
        ApiError::Transport {
            method,
            code,
            message: message.into(),
        }
    }

    pub fn decode(method: &'static str, reason: impl Into<String>) -> Self {
        ApiError::Decode {
            method,
            reason: reason.into(),
        }
    }

    /// Status code when the failure came from the server side.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            ApiError::Transport { code, .. } => Some(*code),
            ApiError::Timeout { .. } => Some(StatusCode::DeadlineExceeded),
            ApiError::Cancelled { .. } => Some(StatusCode::Cancelled),
            _ => None,
        }
    }
}

/// Result type alias for API calls
pub type ApiResult<T> = Result<T, ApiError>;
