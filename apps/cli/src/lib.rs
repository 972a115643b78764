//! # enumgen
//!
//! Command-line driver around [`enumgen_core`]: loads layered settings, reads a manifest of
//! enum declarations, plans every type in parallel and prints the plans as JSON.
//!
//! ## Example
//! ```no_run
//! use enumgen_cli::{load_manifest, load_settings, run_batch};
//! use std::path::Path;
//!
//! let settings = load_settings(None)?;
//! let specs = load_manifest(Path::new("types.json"))?;
//! let report = run_batch(&specs, &settings.defaults);
//! assert!(report.is_success());
//! # Ok::<(), enumgen_cli::CliError>(())
//! ```

pub mod args;
mod error;
pub mod manifest;
pub mod runner;
pub mod settings;

pub use crate::args::Cli;
pub use crate::error::CliError;
pub use crate::manifest::{ManifestEntry, load_manifest, parse_manifest};
pub use crate::runner::{BatchReport, run_batch, write_plans};
pub use crate::settings::{LogFormat, LogSettings, Settings, load_settings};

use enumgen_logger::Logger;

/// Installs the stderr logger described by `settings`, raised by `verbose`.
pub fn init_logger(settings: &LogSettings, verbose: u8) -> anyhow::Result<Logger> {
    let level = settings.effective_level(verbose)?;

    let mut builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).ansi(settings.ansi);
    if let Some(filter) = &settings.filter {
        builder = builder.env_filter(filter);
    }

    let logger = match settings.format {
        LogFormat::Compact => builder.init()?,
        LogFormat::Json => builder.json().init()?,
    };
    Ok(logger)
}
