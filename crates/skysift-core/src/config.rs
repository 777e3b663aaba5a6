use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Selection and evolution-rate thresholds.
///
/// Every field has a default, so a partial TOML file only overrides the
/// values it names. Distances are arcseconds, time spans are days.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// An alert whose nearest solar-system object lies closer than this is
    /// treated as a moving-object match.
    pub ss_dist_max_arcsec: f64,
    /// Star/galaxy score above which the nearest PS1 source counts as a star.
    pub stellar_sgscore_min: f64,
    /// On-sky separation below which the stellar match applies.
    pub stellar_dist_max_arcsec: f64,
    /// Deep real/bogus score below which an alert is rejected as an artifact.
    pub real_bogus_min: f64,
    /// Minimum span between the first historical detection and the alert.
    pub min_history_days: f64,
    /// Maximum span between the first historical detection and the alert.
    pub max_history_days: f64,
    /// Evolution rate (mag/day) above which a candidate is flagged as fast.
    pub rate_min_mag_per_day: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            ss_dist_max_arcsec: 5.0,
            stellar_sgscore_min: 0.76,
            stellar_dist_max_arcsec: 1.0,
            real_bogus_min: 0.9,
            min_history_days: 0.02,
            max_history_days: 12.0,
            rate_min_mag_per_day: 0.3,
        }
    }
}

impl Thresholds {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
