//! # Logger
//!
//! Installs the global tracing subscriber for the generator binaries.
//! All output goes to stderr; stdout is reserved for generated plans.
//!
//! * Human-readable compact lines by default, or one JSON object per event after
//!   [`LoggerBuilder::json`].
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"enumgen_core=trace"`). Without one, `RUST_LOG` is honored on top of the
//!   configured level.
//!
//! ## Example
//!
//! ```rust
//! # use enumgen_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("enumgen")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::LoggerError;
pub use tracing::level_filters::LevelFilter;

use private::Sealed;
use std::io;
use std::marker::PhantomData;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Debug)]
pub struct LoggerConfig {
    level: LevelFilter,
    env_filter: Option<String>,
    ansi: bool,
    target: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { level: LevelFilter::WARN, env_filter: None, ansi: true, target: true }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct Compact;
#[derive(Debug)]
pub struct Json;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for Compact {}
impl Sealed for Json {}

/// Output format selected on the builder.
pub trait Format: Sealed {
    const JSON: bool;
}

impl Format for Compact {
    const JSON: bool = false;
}

impl Format for Json {
    const JSON: bool = true;
}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Format = Compact> {
    config: LoggerConfig,
    name: N,
    format: PhantomData<F>,
}

impl<F: Format> LoggerBuilder<NoName, F> {
    /// Sets the name of the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder { name: WithName(name.into()), config: self.config, format: PhantomData }
    }
}

impl LoggerBuilder<WithName, Compact> {
    /// Enables or disables ANSI colors.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn ansi(mut self, enabled: bool) -> Self {
        self.config.ansi = enabled;
        self
    }

    /// Switches to JSON lines.
    pub fn json(self) -> LoggerBuilder<WithName, Json> {
        let mut config = self.config;
        config.ansi = false;
        LoggerBuilder { config, name: self.name, format: PhantomData }
    }
}

impl<F: Format> LoggerBuilder<WithName, F> {
    /// Configures the minimum log level to be emitted.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds an explicit env filter (e.g., `enumgen_core=trace`).
    ///
    /// Replaces `RUST_LOG`. Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Includes the event target (module path) in each line.
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
        validate_name(&self.name.0)?;

        let env_filter = build_env_filter(&self.config)?;

        let fmt_layer = if F::JSON {
            layer().json().with_writer(io::stderr).with_target(self.config.target).boxed()
        } else {
            layer()
                .compact()
                .with_writer(io::stderr)
                .with_ansi(self.config.ansi)
                .with_target(self.config.target)
                .boxed()
        };

        tracing_subscriber::registry().with(env_filter).with(fmt_layer).try_init()?;

        tracing::debug!(name = %self.name.0, json = F::JSON, "Logger initialized");
        Ok(Logger { name: self.name.0 })
    }
}

/// A handle to the initialized logging system.
#[must_use = "The handle names the process in its shutdown log line."]
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
    /// use enumgen_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("enumgen")
    ///     .level(LevelFilter::INFO)
    ///     .json()
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder { config: LoggerConfig::default(), name: NoName, format: PhantomData }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        tracing::debug!(name = %self.name, "Logging system shutting down");
    }
}

fn validate_name(name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
        });
    }
    Ok(())
}

fn build_env_filter(config: &LoggerConfig) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.into());
    config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
            })
        },
    )
}
