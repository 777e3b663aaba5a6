use std::collections::HashSet;

use once_cell::sync::Lazy;
use polars::prelude::*;
use serde::Serialize;

use crate::config::Thresholds;

/// Value the survey pipeline writes into `ssdistnr` when no solar-system
/// object matched the alert.
pub const SS_NO_MATCH_SENTINEL: f64 = -999.0;

#[derive(Debug, Clone)]
pub struct CriterionDescriptor {
    pub code: &'static str,
    pub description: &'static str,
}

static CRITERIA: Lazy<Vec<CriterionDescriptor>> = Lazy::new(|| {
    vec![
        CriterionDescriptor {
            code: "moving_object",
            description: "solar-system object within ss_dist_max_arcsec",
        },
        CriterionDescriptor {
            code: "stellar_source",
            description: "high sgscore1 star within stellar_dist_max_arcsec",
        },
        CriterionDescriptor {
            code: "low_real_bogus",
            description: "drb below real_bogus_min",
        },
        CriterionDescriptor {
            code: "history_too_short",
            description: "jd - jdstarthist below min_history_days",
        },
        CriterionDescriptor {
            code: "history_too_long",
            description: "jd - jdstarthist above max_history_days",
        },
    ]
});

pub fn all_criteria() -> &'static [CriterionDescriptor] {
    CRITERIA.as_slice()
}

/// Per-criterion rejection counts for one filter pass.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionSummary {
    pub total: usize,
    pub selected: usize,
    /// (criterion code, rejected row count), in registry order. A row can
    /// trip several criteria at once, so the counts are not disjoint.
    pub rejected_by: Vec<(String, usize)>,
}

impl SelectionSummary {
    pub fn selected_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.selected as f64 / self.total as f64
        }
    }
}

pub struct SelectionOutput {
    pub dataframe: DataFrame,
    pub summary: SelectionSummary,
}

/// A solar-system match: non-sentinel distance below the threshold.
///
/// The -999 sentinel (and any other negative value) never counts as a match.
pub fn is_moving_object(ssdistnr: Option<f64>, thresholds: &Thresholds) -> bool {
    matches!(ssdistnr, Some(dist) if dist >= 0.0 && dist < thresholds.ss_dist_max_arcsec)
}

/// A stellar counterpart: star-like sgscore1 with a small on-sky separation.
pub fn is_stellar_source(
    sgscore1: Option<f64>,
    distpsnr1: Option<f64>,
    thresholds: &Thresholds,
) -> bool {
    matches!(
        (sgscore1, distpsnr1),
        (Some(score), Some(dist))
            if score > thresholds.stellar_sgscore_min && dist < thresholds.stellar_dist_max_arcsec
    )
}

pub fn is_low_real_bogus(drb: Option<f64>, thresholds: &Thresholds) -> bool {
    matches!(drb, Some(score) if score < thresholds.real_bogus_min)
}

/// Days between the first historical detection and this alert.
pub fn history_days(jd: Option<f64>, jdstarthist: Option<f64>) -> Option<f64> {
    Some(jd? - jdstarthist?)
}

/// Run every selection criterion over the alert table.
///
/// Appends a `selected` boolean column plus a `rejection_reasons` column
/// holding the tripped criterion codes joined with `|` (null when the row
/// survives). Rows with null inputs for a criterion simply do not trip it.
pub fn apply_selection_filters(
    df: &DataFrame,
    thresholds: &Thresholds,
) -> Result<SelectionOutput, PolarsError> {
    let len = df.height();

    let ssdistnr = df.column("ssdistnr")?.f64()?;
    let sgscore1 = df.column("sgscore1")?.f64()?;
    let distpsnr1 = df.column("distpsnr1")?.f64()?;
    let drb = df.column("drb")?.f64()?;
    let jd = df.column("jd")?.f64()?;
    let jdstarthist = df.column("jdstarthist")?.f64()?;

    let mut selected: Vec<bool> = Vec::with_capacity(len);
    let mut reasons_col: Vec<Option<String>> = Vec::with_capacity(len);
    let mut counts = vec![0usize; CRITERIA.len()];

    for idx in 0..len {
        let mut reasons: Vec<&'static str> = Vec::new();

        if is_moving_object(ssdistnr.get(idx), thresholds) {
            reasons.push("moving_object");
        }
        if is_stellar_source(sgscore1.get(idx), distpsnr1.get(idx), thresholds) {
            reasons.push("stellar_source");
        }
        if is_low_real_bogus(drb.get(idx), thresholds) {
            reasons.push("low_real_bogus");
        }
        if let Some(days) = history_days(jd.get(idx), jdstarthist.get(idx)) {
            if days < thresholds.min_history_days {
                reasons.push("history_too_short");
            } else if days > thresholds.max_history_days {
                reasons.push("history_too_long");
            }
        }

        for reason in &reasons {
            if let Some(pos) = CRITERIA.iter().position(|c| c.code == *reason) {
                counts[pos] += 1;
            }
        }

        if reasons.is_empty() {
            selected.push(true);
            reasons_col.push(None);
        } else {
            selected.push(false);
            reasons_col.push(Some(reasons.join("|")));
        }
    }

    let selected_count = selected.iter().filter(|flag| **flag).count();

    let selected_series = Series::new("selected".into(), selected);
    let reasons_series = Series::new(
        "rejection_reasons".into(),
        reasons_col
            .iter()
            .map(|opt| opt.as_deref())
            .collect::<Vec<Option<&str>>>(),
    );

    let mut output = df.clone();
    let mut columns = [selected_series.into(), reasons_series.into()];
    output.hstack_mut(columns.as_mut_slice())?;

    let rejected_by = CRITERIA
        .iter()
        .zip(counts)
        .map(|(criterion, count)| (criterion.code.to_string(), count))
        .collect();

    Ok(SelectionOutput {
        dataframe: output,
        summary: SelectionSummary {
            total: len,
            selected: selected_count,
            rejected_by,
        },
    })
}

/// De-duplicated object ids of the surviving rows, in first-seen order.
pub fn selected_object_ids(df: &DataFrame) -> Result<Vec<String>, PolarsError> {
    let selected = df.column("selected")?.bool()?;
    let object_ids = df.column("objectId")?.str()?;

    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for idx in 0..df.height() {
        if !selected.get(idx).unwrap_or(false) {
            continue;
        }
        if let Some(id) = object_ids.get(idx) {
            if seen.insert(id) {
                out.push(id.to_string());
            }
        }
    }

    Ok(out)
}
