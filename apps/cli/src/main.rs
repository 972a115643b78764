#![allow(clippy::print_stderr)]

use anyhow::Context;
use clap::Parser;
use enumgen_cli::settings::DEFAULT_SETTINGS;
use enumgen_cli::{Cli, init_logger, load_manifest, load_settings, run_batch, write_plans};
use std::io;
use std::process::ExitCode;
use tracing::info;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut settings =
        load_settings(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _log = init_logger(&settings.log, cli.verbose)?;
    let source = cli.config.as_deref().map_or_else(|| DEFAULT_SETTINGS.to_owned(), |path| path.display().to_string());
    info!(%source, global_directives = settings.defaults.set_count(), "Loaded settings");

    settings.apply_directives(&cli.directives)?;
    let specs = load_manifest(&cli.manifest)?;

    let report = run_batch(&specs, &settings.defaults);
    write_plans(io::stdout().lock(), &report.plans, cli.pretty).context("Failed to write plans")?;

    for failure in &report.failures {
        eprintln!("error: {failure}");
    }

    Ok(if report.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
