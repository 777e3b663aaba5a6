use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Args, Debug)]
pub struct ScanArgs {
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
}

pub fn run(args: ScanArgs) -> Result<()> {
    let mut thresholds = super::load_thresholds(args.config.as_deref())?;
    if let Some(rate_min) = args.rate_min {
        thresholds.rate_min_mag_per_day = rate_min;
    }

    println!(
        "Scan started {} (rate threshold {} mag/day)",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        thresholds.rate_min_mag_per_day,
    );

    let outcome = super::run_scan(&args.alerts, &args.light_curves, &thresholds)?;

    println!("\n{}", super::summary_table(&outcome.summary));

    if outcome.report.flagged.is_empty() {
        println!("\nNo candidate exceeded the rate threshold.");
    } else {
        println!(
            "\n{} fast-evolving candidate(s):\n{}",
            outcome.report.flagged.len(),
            super::candidates_table(&outcome.report, &outcome.light_curves),
        );
    }

    if !outcome.report.missing.is_empty() {
        println!(
            "\n{} object(s) had no light curve in the prepared file: {}",
            outcome.report.missing.len(),
            outcome.report.missing.join(", "),
        );
    }

    Ok(())
}
