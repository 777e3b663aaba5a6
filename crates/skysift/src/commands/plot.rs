use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Args;

use skysift_core::lightcurve::load_light_curves;
use skysift_core::plot::render_light_curve;

#[derive(Args, Debug)]
pub struct PlotArgs {
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
    /// Directory for the rendered PNG files.
    #[arg(long, default_value = "plots")]
    pub out_dir: PathBuf,
    /// Plot a single object instead of the flagged candidates.
    #[arg(long)]
    pub object_id: Option<String>,
    /// Maximum number of flagged candidates to plot.
    #[arg(long, default_value_t = 8)]
    pub limit: usize,
}

pub fn run(args: PlotArgs) -> Result<()> {
    let mut thresholds = super::load_thresholds(args.config.as_deref())?;
    if let Some(rate_min) = args.rate_min {
        thresholds.rate_min_mag_per_day = rate_min;
    }
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("failed to create {}", args.out_dir.display()))?;

    if let Some(object_id) = args.object_id {
        let light_curves = load_light_curves(&args.light_curves).with_context(|| {
            format!("failed to load light curves {}", args.light_curves.display())
        })?;
        let detections = light_curves
            .get(&object_id)
            .ok_or_else(|| anyhow!("no light curve for {object_id}"))?;

        let path = args.out_dir.join(format!("{object_id}.png"));
        render_light_curve(&object_id, detections, &path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let outcome = super::run_scan(&args.alerts, &args.light_curves, &thresholds)?;

    let mut written = 0usize;
    for candidate in outcome.report.flagged.iter().take(args.limit) {
        let Some(detections) = outcome.light_curves.get(&candidate.object_id) else {
            continue;
        };
        let path = args.out_dir.join(format!("{}.png", candidate.object_id));
        render_light_curve(&candidate.object_id, detections, &path)?;
        written += 1;
    }

    println!("Wrote {} plot(s) to {}", written, args.out_dir.display());
    Ok(())
}
