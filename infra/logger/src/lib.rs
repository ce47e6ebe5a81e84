//! # Logger
//!
//! A centralized logging utility for the project.
//! It configures a single global `tracing` subscriber whose output goes to the browser console
//! on `wasm32` (`console.error`/`warn`/`info`/`debug` by level) and to stderr elsewhere.
//!
//! * Timestamps are always off: `wasm32-unknown-unknown` has no system clock and the browser
//!   console stamps entries itself.
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"folio_contact=debug,folio=info"`). There is no process environment in the
//!   browser, so `RUST_LOG` is never consulted.
//!
//! ## Example
//!
//! ```rust
//! # use folio_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("portfolio")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;
mod writer;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use crate::writer::{ConsoleWriter, MakeConsoleWriter};
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug)]
pub struct LoggerConfig {
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    target: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { console: true, level: LevelFilter::INFO, env_filter: None, target: true }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName> {
    config: LoggerConfig,
    name: N,
}

impl LoggerBuilder<NoName> {
    /// Sets the name of the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName> {
        LoggerBuilder { name: WithName(name.into()), config: self.config }
    }
}

impl LoggerBuilder<WithName> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit filter directive (e.g., `folio_contact=debug`).
    ///
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Enables console logging.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Prefixes every line with the emitting module path.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn target(mut self, enabled: bool) -> Self {
        self.config.target = enabled;
        self
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config, &self.name.0)?;

        let env_filter = build_env_filter(&self.config)?;

        let mut layers = Vec::new();

        if self.config.console {
            layers.push(
                layer()
                    .compact()
                    .with_ansi(false)
                    .without_time()
                    .with_target(self.config.target)
                    .with_writer(MakeConsoleWriter)
                    .boxed(),
            );
        }

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(env_filter).with(layers).try_init()?;

        tracing::debug!(logger = %self.name.0, "Logger initialized");
        Ok(Logger { name: self.name.0 })
    }
}

/// A handle to the initialized logging system.
#[must_use = "Keep the handle to know which logger owns the global subscriber."]
#[derive(Debug)]
pub struct Logger {
    name: String,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("portfolio")
    ///     .level(LevelFilter::DEBUG)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.level == LevelFilter::OFF && config.env_filter.is_none() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Level OFF without a filter would discard every event".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.parse_lossy("")),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_logger_builder_initial_state() {
        let logger_builder = Logger::builder().name("test-app").env_filter("folio=debug");
        assert!(logger_builder.config.console);
        assert!(logger_builder.config.target);
        assert_eq!(logger_builder.config.level, LevelFilter::INFO);
        assert_eq!(logger_builder.config.env_filter.as_deref(), Some("folio=debug"));
    }

    #[test]
    #[serial]
    fn test_logger_builder_configuration() {
        let logger_builder = Logger::builder()
            .name("test-app")
            .console(false)
            .target(false)
            .env_filter("folio_contact=trace")
            .level(LevelFilter::DEBUG);

        assert!(!logger_builder.config.console);
        assert!(!logger_builder.config.target);
        assert_eq!(logger_builder.config.level, LevelFilter::DEBUG);
        assert_eq!(logger_builder.config.env_filter.as_deref(), Some("folio_contact=trace"));
    }

    #[test]
    #[serial]
    fn test_invalid_configurations_are_rejected_before_install() {
        let empty = Logger::builder().name("  ").init().expect_err("empty name");
        assert!(matches!(empty, LoggerError::InvalidConfiguration { .. }));

        let bad_filter =
            Logger::builder().name("test-app").env_filter("folio=[").init().expect_err("filter");
        assert!(bad_filter.to_string().contains("Invalid env filter"));

        let silent = Logger::builder().name("test-app").console(false).init().expect_err("layers");
        assert!(silent.to_string().contains("No logging layers enabled"));

        let off = Logger::builder().name("test-app").level(LevelFilter::OFF).init().expect_err("off");
        assert!(matches!(off, LoggerError::InvalidConfiguration { .. }));
    }
}
