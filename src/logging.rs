//! Logging configuration and initialization.
//!
//! The library itself only emits `tracing` events; applications that do not
//! install their own subscriber can use [`LoggingConfig::init`].

use tracing_subscriber::{fmt, EnvFilter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output layout of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Install a global tracing subscriber with this configuration.
    ///
    /// Fails if the filter directive does not parse or a global subscriber
    /// is already installed.
    pub fn init(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => self.level_filter()?,
        };

        match self.format {
            LogFormat::Pretty => fmt().pretty().with_env_filter(filter).try_init(),
            LogFormat::Compact => fmt().compact().with_env_filter(filter).try_init(),
        }
    }

    fn level_filter(&self) -> Result<EnvFilter, tracing_subscriber::filter::ParseError> {
        EnvFilter::try_new(&self.level)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "invest_api=info".into(),
            format: LogFormat::Pretty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_rejected() {
        let config = LoggingConfig {
            level: "invest_api=loud".to_string(),
            format: LogFormat::Compact,
        };
        assert!(config.level_filter().is_err());
    }

    #[test]
    fn test_level_directives_parse() {
        for level in ["warn", "invest_api=debug", "invest_api=trace,tokio=info"] {
            let config = LoggingConfig {
                level: level.to_string(),
                ..LoggingConfig::default()
            };
            assert!(config.level_filter().is_ok(), "{level}");
        }
    }

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "invest_api=info");
        assert_eq!(config.format, LogFormat::Pretty);
    }
}
