//! Layered settings: built-in defaults, then an optional settings file, then `ENUMGEN__*`
//! environment variables.
//!
//! ```toml
//! [defaults]
//! marshal = true
//! nocase = true
//! prefix = "Pb"
//!
//! [log]
//! level = "info"
//! format = "json"
//! ```

use crate::error::CliError;
use config::{Config, Environment, File};
use enumgen_core::{EnumConfig, parse_annotation};
use enumgen_logger::LevelFilter;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// Settings file looked up in the working directory when no `--config` is given.
/// The extension is resolved by the `config` crate.
pub const DEFAULT_SETTINGS: &str = "enumgen";

pub const ENV_PREFIX: &str = "ENUMGEN";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Global directives every type starts from.
    pub defaults: EnumConfig,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub format: LogFormat,
    /// `tracing` env-filter directives; replaces `RUST_LOG` when set.
    pub filter: Option<String>,
    pub ansi: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self { level: "warn".to_owned(), format: LogFormat::Compact, filter: None, ansi: true }
    }
}

impl LogSettings {
    /// Configured level raised by `verbose` steps (`-v` info, `-vv` debug, `-vvv` trace).
    pub fn effective_level(&self, verbose: u8) -> Result<LevelFilter, CliError> {
        let configured = LevelFilter::from_str(&self.level)
            .map_err(|_| CliError::LogLevel { value: self.level.clone() })?;

        let requested = match verbose {
            0 => LevelFilter::OFF,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };

        Ok(configured.max(requested))
    }
}

impl Settings {
    /// Applies `-D` directives on top of the loaded defaults, in order.
    pub fn apply_directives<I, S>(&mut self, directives: I) -> Result<(), CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for directive in directives {
            parse_annotation(directive.as_ref(), &mut self.defaults)?;
        }
        Ok(())
    }
}

/// Loads settings.
///
/// An explicit `path` must exist; the default `enumgen.*` file is optional.
/// Environment variables win over the file (`ENUMGEN__DEFAULTS__MARSHAL=true`,
/// `ENUMGEN__LOG__LEVEL=debug`).
pub fn load_settings(path: Option<&Path>) -> Result<Settings, CliError> {
    let file = path.map_or_else(
        || File::with_name(DEFAULT_SETTINGS).required(false),
        |path| File::from(path).required(true),
    );

    let settings = Config::builder()
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
        .build()?
        .try_deserialize::<Settings>()?;

    Ok(settings)
}
