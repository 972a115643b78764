//! Batch planning.

use enumgen_core::{EnumConfig, EnumSpec, GenerateError, GenerationPlan, generate};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;
use tracing::info;

/// Outcome of one batch, in manifest order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub plans: Vec<GenerationPlan>,
    pub failures: Vec<GenerateError>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Plans every spec in parallel against the shared global defaults.
///
/// A failing type is recorded in the report for the caller to surface; the remaining types are
/// still planned.
pub fn run_batch(specs: &[EnumSpec], global: &EnumConfig) -> BatchReport {
    let results: Vec<_> = specs.par_iter().map(|spec| generate(spec, global)).collect();

    let mut report = BatchReport::default();
    for result in results {
        match result {
            Ok(plan) => report.plans.push(plan),
            Err(err) => report.failures.push(err),
        }
    }

    info!(planned = report.plans.len(), failed = report.failures.len(), "Batch finished");
    report
}

/// Writes the successful plans as a JSON array followed by a newline.
pub fn write_plans<W: Write>(mut out: W, plans: &[GenerationPlan], pretty: bool) -> std::io::Result<()> {
    write_json(&mut out, plans, pretty)?;
    writeln!(out)?;
    out.flush()
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T, pretty: bool) -> std::io::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(out, value)?;
    } else {
        serde_json::to_writer(out, value)?;
    }
    Ok(())
}
