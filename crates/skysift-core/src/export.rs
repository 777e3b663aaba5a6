use std::path::Path;

use crate::error::Result;
use crate::evolution::EvolutionReport;

/// Write the flagged candidates to a CSV file, one row per candidate.
pub fn write_candidate_csv(report: &EvolutionReport, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "objectId",
        "band",
        "rate_mag_per_day",
        "mag_span",
        "day_span",
        "detections",
    ])?;

    for candidate in &report.flagged {
        let rate = format!("{:.4}", candidate.rate.rate_mag_per_day);
        let mag_span = format!("{:.4}", candidate.rate.mag_span);
        let day_span = format!("{:.4}", candidate.rate.day_span);
        let detections = candidate.detections.to_string();
        writer.write_record([
            candidate.object_id.as_str(),
            candidate.band.as_str(),
            rate.as_str(),
            mag_span.as_str(),
            day_span.as_str(),
            detections.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
