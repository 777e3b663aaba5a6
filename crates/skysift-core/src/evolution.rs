use serde::Serialize;
use tracing::warn;

use crate::lightcurve::{by_band, Band, Detection, LightCurves};

/// Evolution rate of one band of a light curve.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RateEstimate {
    /// Faintest minus brightest magnitude; never negative.
    pub mag_span: f64,
    /// Absolute time separating the two extrema, in days.
    pub day_span: f64,
    pub rate_mag_per_day: f64,
}

/// Candidate whose light curve evolves faster than the threshold.
#[derive(Debug, Clone, Serialize)]
pub struct FastEvolver {
    pub object_id: String,
    /// Band with the fastest measured rate.
    pub band: Band,
    pub rate: RateEstimate,
    pub detections: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct EvolutionReport {
    pub flagged: Vec<FastEvolver>,
    /// Object ids with no entry in the light-curve mapping. These are
    /// expected (upstream data reduction truncates the file) and never abort
    /// the scan.
    pub missing: Vec<String>,
    pub scanned: usize,
}

/// Magnitude span over time span between the faintest and brightest
/// detections of one band.
///
/// The time span is taken as an absolute value, so the statistic is
/// symmetric under time reversal. Returns `None` for fewer than two
/// detections or when the two extrema share a timestamp.
pub fn band_rate(points: &[&Detection]) -> Option<RateEstimate> {
    if points.len() < 2 {
        return None;
    }

    let mut faintest = points[0];
    let mut brightest = points[0];
    for det in &points[1..] {
        if det.magpsf > faintest.magpsf {
            faintest = det;
        }
        if det.magpsf < brightest.magpsf {
            brightest = det;
        }
    }

    let mag_span = faintest.magpsf - brightest.magpsf;
    let day_span = (faintest.jd - brightest.jd).abs();
    if day_span == 0.0 {
        return None;
    }

    Some(RateEstimate {
        mag_span,
        day_span,
        rate_mag_per_day: mag_span / day_span,
    })
}

/// Scan the selected objects and flag those evolving faster than
/// `rate_min_mag_per_day` in any band.
pub fn scan_candidates(
    object_ids: &[String],
    light_curves: &LightCurves,
    rate_min_mag_per_day: f64,
) -> EvolutionReport {
    let mut report = EvolutionReport::default();

    for object_id in object_ids {
        let Some(detections) = light_curves.get(object_id) else {
            warn!(object_id = object_id.as_str(), "no light curve for object, skipping");
            report.missing.push(object_id.clone());
            continue;
        };
        report.scanned += 1;

        let mut fastest: Option<(Band, RateEstimate)> = None;
        for (band, points) in by_band(detections) {
            if let Some(rate) = band_rate(&points) {
                let faster = fastest
                    .map(|(_, current)| rate.rate_mag_per_day > current.rate_mag_per_day)
                    .unwrap_or(true);
                if faster {
                    fastest = Some((band, rate));
                }
            }
        }

        if let Some((band, rate)) = fastest {
            if rate.rate_mag_per_day > rate_min_mag_per_day {
                report.flagged.push(FastEvolver {
                    object_id: object_id.clone(),
                    band,
                    rate,
                    detections: detections.len(),
                });
            }
        }
    }

    report
}
