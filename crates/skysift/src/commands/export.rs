use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use skysift_core::export::write_candidate_csv;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path to the alert metadata table (JSON, keyed by candid).
    #[arg(long)]
    pub alerts: PathBuf,
    /// Path to the per-object light-curve mapping (JSON).
    #[arg(long = "light-curves")]
    pub light_curves: PathBuf,
    /// Optional TOML file overriding the default thresholds.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Override the evolution-rate threshold (mag/day) for this run.
    #[arg(long)]
    pub rate_min: Option<f64>,
    /// Destination CSV file.
    #[arg(long, default_value = "candidates.csv")]
    pub out: PathBuf,
}

pub fn run(args: ExportArgs) -> Result<()> {
    let mut thresholds = super::load_thresholds(args.config.as_deref())?;
    if let Some(rate_min) = args.rate_min {
        thresholds.rate_min_mag_per_day = rate_min;
    }
    let outcome = super::run_scan(&args.alerts, &args.light_curves, &thresholds)?;

    write_candidate_csv(&outcome.report, &args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    println!(
        "Wrote {} candidate(s) to {}",
        outcome.report.flagged.len(),
        args.out.display(),
    );
    Ok(())
}
