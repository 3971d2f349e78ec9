// ============================================================================
// Client Configuration
// Endpoint, connection settings and paging limits for an API client
// ============================================================================

use super::errors::ConfigError;
use super::paging::PagingConfig;
use std::fmt;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// API Target
// ============================================================================

/// Remote endpoint the transport connects to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApiTarget {
    pub host: String,
    pub port: u16,
}

impl ApiTarget {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Live trading endpoint
    pub fn production() -> Self {
        Self::new("invest-public-api.tinkoff.ru", 443)
    }

    /// Sandbox endpoint; orders never reach the exchange
    pub fn sandbox() -> Self {
        Self::new("sandbox-invest-public-api.tinkoff.ru", 443)
    }

    pub fn is_sandbox(&self) -> bool {
        self.host.starts_with("sandbox-")
    }
}

impl Default for ApiTarget {
    fn default() -> Self {
        Self::production()
    }
}

impl fmt::Display for ApiTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

// ============================================================================
// Connection Settings
// ============================================================================

/// Channel tuning handed to the transport, plus the per-call deadline the
/// client enforces itself.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConnectionSettings {
    /// Largest inbound message in bytes
    pub max_receive_message_length: usize,

    #[cfg_attr(feature = "serde", serde(with = "super::duration_ms"))]
    pub idle_timeout: Duration,

    #[cfg_attr(feature = "serde", serde(with = "super::duration_ms"))]
    pub keepalive_interval: Duration,

    #[cfg_attr(feature = "serde", serde(with = "super::duration_ms"))]
    pub keepalive_timeout: Duration,

    /// Optional: Deadline for a single unary call
    /// None means calls wait for the transport indefinitely
    #[cfg_attr(feature = "serde", serde(with = "super::option_duration_ms"))]
    pub request_timeout: Option<Duration>,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            max_receive_message_length: 8 * 1024 * 1024,
            idle_timeout: Duration::from_secs(30),
            keepalive_interval: Duration::from_secs(15),
            keepalive_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}

// ============================================================================
// Complete Client Configuration
// ============================================================================

/// Everything needed to build an `InvestApiClient` apart from the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClientConfig {
    pub target: ApiTarget,
    pub connection: ConnectionSettings,
    pub paging: PagingConfig,
}

impl ClientConfig {
    pub fn new(target: ApiTarget) -> Self {
        Self {
            target,
            connection: ConnectionSettings::default(),
            paging: PagingConfig::default(),
        }
    }

    pub fn production() -> Self {
        Self::new(ApiTarget::production())
    }

    pub fn sandbox() -> Self {
        Self::new(ApiTarget::sandbox())
    }

    /// Builder method: Set the per-call deadline
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.connection.request_timeout = Some(timeout);
        self
    }

    /// Builder method: Replace the connection settings
    pub fn with_connection(mut self, connection: ConnectionSettings) -> Self {
        self.connection = connection;
        self
    }

    /// Builder method: Replace the paging limits
    pub fn with_paging(mut self, paging: PagingConfig) -> Self {
        self.paging = paging;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target.host.is_empty() {
            return Err(ConfigError::MissingField {
                field: "target.host",
            });
        }

        if self.target.port == 0 {
            return Err(ConfigError::invalid("target.port", "must be non-zero"));
        }

        let connection = &self.connection;
        if connection.max_receive_message_length == 0 {
            return Err(ConfigError::invalid(
                "connection.max_receive_message_length",
                "must be positive",
            ));
        }

        if connection.keepalive_timeout > connection.keepalive_interval {
            return Err(ConfigError::invalid(
                "connection.keepalive_timeout",
                "cannot exceed keepalive_interval",
            ));
        }

        if connection.request_timeout == Some(Duration::ZERO) {
            return Err(ConfigError::invalid(
                "connection.request_timeout",
                "must be positive",
            ));
        }

        self.paging.validate()
    }

    /// Parse and validate a TOML document. Missing sections fall back to defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}
