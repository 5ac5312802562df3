//! Tracing subscriber setup for glyphset binaries.
//!
//! # Design
//! - Events go to stderr so tools that print rendered markup keep stdout clean.
//! - `RUST_LOG` wins over the configured level when present.
//! - The output format is a [`LogFormat`] value, parsed by clap at the edge so a
//!   misspelt format fails argument parsing instead of being guessed.

use std::io;

use anyhow::{Context, Result};
use clap::ValueEnum;
use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

static BUILD_SHA: OnceCell<String> = OnceCell::new();

/// Log output layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Human-readable lines.
    Pretty,
}

impl LogFormat {
    /// Pretty output for debug builds, JSON otherwise.
    #[must_use]
    pub const fn infer() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

/// Settings for [`init_logging`].
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// Level directive used when `RUST_LOG` is absent.
    pub level: &'a str,
    /// Output layout.
    pub format: LogFormat,
    /// Build identifier attached to the startup event.
    pub build_sha: &'a str,
}

impl LoggingConfig<'_> {
    /// Default settings with an explicit format, or the inferred one.
    #[must_use]
    pub fn with_format(format: Option<LogFormat>) -> Self {
        Self {
            format: format.unwrap_or_else(LogFormat::infer),
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
            format: LogFormat::infer(),
            build_sha: build_sha(),
        }
    }
}

/// Install the global subscriber described by `config`.
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig<'_>) -> Result<()> {
    let _ = BUILD_SHA.set(config.build_sha.to_string());

    let output = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(false)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
            .boxed(),
    };
    tracing_subscriber::registry()
        .with(output)
        .with(env_filter(config.level))
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::debug!(build_sha = build_sha(), format = ?config.format, "logging initialised");
    Ok(())
}

/// Build SHA recorded by the first [`init_logging`] call, or `dev`.
#[must_use]
pub fn build_sha() -> &'static str {
    BUILD_SHA.get().map_or("dev", String::as_str)
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_are_strict() {
        assert_eq!(LogFormat::from_str("json", false), Ok(LogFormat::Json));
        assert_eq!(LogFormat::from_str("pretty", false), Ok(LogFormat::Pretty));
        assert!(LogFormat::from_str("jsn", false).is_err());
        assert!(LogFormat::from_str("", false).is_err());
    }

    #[test]
    fn missing_format_falls_back_to_build_profile() {
        assert_eq!(LoggingConfig::with_format(None).format, LogFormat::infer());
        let config = LoggingConfig::with_format(Some(LogFormat::Json));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn second_install_is_rejected() {
        let config = LoggingConfig {
            level: "warn",
            format: LogFormat::Json,
            build_sha: "abc1234",
        };
        let first = init_logging(&config);
        let second = init_logging(&config).expect_err("subscriber already installed");
        assert!(format!("{second:#}").contains("failed to install tracing subscriber"));
        if first.is_ok() {
            assert_eq!(build_sha(), "abc1234");
        }
    }
}
