use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL, Table};
use tracing::info;

use skysift_core::catalog::{jd_to_datetime, load_alert_table};
use skysift_core::config::Thresholds;
use skysift_core::evolution::{scan_candidates, EvolutionReport};
use skysift_core::filters::{
    all_criteria, apply_selection_filters, selected_object_ids, SelectionOutput, SelectionSummary,
};
use skysift_core::lightcurve::{load_light_curves, LightCurves};

pub mod export;
pub mod plot;
pub mod scan;
pub mod select;

pub fn load_thresholds(config: Option<&Path>) -> Result<Thresholds> {
    match config {
        Some(path) => Thresholds::from_path(path)
            .with_context(|| format!("failed to load thresholds from {}", path.display())),
        None => Ok(Thresholds::default()),
    }
}

pub fn run_selection(alerts: &Path, thresholds: &Thresholds) -> Result<SelectionOutput> {
    let df = load_alert_table(alerts)
        .with_context(|| format!("failed to load alert table {}", alerts.display()))?;
    info!(rows = df.height(), "alert table loaded");

    let output = apply_selection_filters(&df, thresholds).context("filter chain failed")?;
    info!(
        selected = output.summary.selected,
        total = output.summary.total,
        "selection finished"
    );
    Ok(output)
}

pub struct ScanOutcome {
    pub summary: SelectionSummary,
    pub report: EvolutionReport,
    pub light_curves: LightCurves,
}

/// Filter chain followed by the per-object evolution-rate check.
pub fn run_scan(
    alerts: &Path,
    light_curves_path: &Path,
    thresholds: &Thresholds,
) -> Result<ScanOutcome> {
    let selection = run_selection(alerts, thresholds)?;
    let candidates = selected_object_ids(&selection.dataframe)?;

    let light_curves = load_light_curves(light_curves_path)
        .with_context(|| format!("failed to load light curves {}", light_curves_path.display()))?;
    info!(objects = light_curves.len(), "light curves loaded");

    let report = scan_candidates(&candidates, &light_curves, thresholds.rate_min_mag_per_day);
    info!(
        flagged = report.flagged.len(),
        missing = report.missing.len(),
        scanned = report.scanned,
        "evolution scan finished"
    );

    Ok(ScanOutcome {
        summary: selection.summary,
        report,
        light_curves,
    })
}

pub fn summary_table(summary: &SelectionSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["criterion", "rejected", "fraction", "description"]);

    for (criterion, (code, count)) in all_criteria().iter().zip(&summary.rejected_by) {
        let fraction = if summary.total == 0 {
            0.0
        } else {
            *count as f64 / summary.total as f64
        };
        table.add_row(vec![
            code.clone(),
            count.to_string(),
            format!("{fraction:.4}"),
            criterion.description.to_string(),
        ]);
    }

    table.add_row(vec![
        "selected".to_string(),
        summary.selected.to_string(),
        format!("{:.4}", summary.selected_fraction()),
        "alerts surviving every criterion".to_string(),
    ]);

    table
}

pub fn candidates_table(report: &EvolutionReport, light_curves: &LightCurves) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "objectId",
        "band",
        "rate (mag/day)",
        "mag span",
        "day span",
        "points",
        "last seen (UTC)",
    ]);

    for candidate in &report.flagged {
        let last_seen = light_curves
            .get(&candidate.object_id)
            .and_then(|detections| {
                detections
                    .iter()
                    .map(|det| det.jd)
                    .fold(None::<f64>, |acc, jd| {
                        Some(acc.map_or(jd, |current| current.max(jd)))
                    })
            })
            .and_then(jd_to_datetime)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            candidate.object_id.clone(),
            candidate.band.to_string(),
            format!("{:.3}", candidate.rate.rate_mag_per_day),
            format!("{:.2}", candidate.rate.mag_span),
            format!("{:.2}", candidate.rate.day_span),
            candidate.detections.to_string(),
            last_seen,
        ]);
    }

    table
}
