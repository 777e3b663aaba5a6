use std::path::PathBuf;

use polars::prelude::*;

use skysift_core::catalog::load_alert_table;
use skysift_core::config::Thresholds;
use skysift_core::evolution::scan_candidates;
use skysift_core::filters::{apply_selection_filters, selected_object_ids};
use skysift_core::lightcurve::{load_light_curves, Band};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn fixture_catalog_yields_one_fast_candidate() -> PolarsResult<()> {
    let thresholds = Thresholds::default();

    let df = load_alert_table(&fixture("alerts.json")).expect("alert table load failed");
    let output = apply_selection_filters(&df, &thresholds)?;

    // the stellar alert and the moving-object alert drop out
    assert_eq!(output.summary.total, 4);
    assert_eq!(output.summary.selected, 2);

    let candidates = selected_object_ids(&output.dataframe)?;
    assert_eq!(candidates, vec!["ZTF22aaajecp".to_string()]);

    let light_curves =
        load_light_curves(&fixture("light_curves.json")).expect("light curve load failed");
    let report = scan_candidates(&candidates, &light_curves, thresholds.rate_min_mag_per_day);

    assert_eq!(report.scanned, 1);
    assert!(report.missing.is_empty());
    assert_eq!(report.flagged.len(), 1);

    let flagged = &report.flagged[0];
    assert_eq!(flagged.object_id, "ZTF22aaajecp");
    // r declines 0.33 mag in 0.97 days, faster than the g-band rise
    assert_eq!(flagged.band, Band::R);
    assert!((flagged.rate.rate_mag_per_day - 0.33 / 0.97).abs() < 1e-6);

    Ok(())
}
