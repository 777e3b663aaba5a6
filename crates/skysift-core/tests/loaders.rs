use std::path::PathBuf;

use polars::prelude::*;

use skysift_core::catalog::load_alert_table;
use skysift_core::lightcurve::{load_light_curves, Band};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn alert_table_loads_with_expected_shape() -> PolarsResult<()> {
    let df = load_alert_table(&fixture("alerts.json")).expect("alert table load failed");

    assert_eq!(df.height(), 4);
    let names: Vec<&str> = df
        .get_column_names()
        .iter()
        .map(|name| name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "candid",
            "objectId",
            "ndethist",
            "sgscore1",
            "distpsnr1",
            "ssdistnr",
            "jd",
            "jdstarthist",
            "drb",
        ],
    );

    // rows follow lexicographic candid ordering: the three 2459760... alerts
    // come first, the 2459761... alert last
    let candid = df.column("candid")?.str()?;
    assert_eq!(candid.get(0), Some("2459760000100015001"));
    assert_eq!(candid.get(2), Some("2459760000100015004"));
    assert_eq!(candid.get(3), Some("2459761000100015003"));

    let object_id = df.column("objectId")?.str()?;
    assert_eq!(object_id.get(0), Some("ZTF22aaajecp"));
    assert_eq!(object_id.get(2), Some("ZTF22aamvpkq"));

    let sgscore1 = df.column("sgscore1")?.f64()?;
    assert!(sgscore1.get(2).is_none());
    assert_eq!(sgscore1.get(3), Some(0.03));

    let ssdistnr = df.column("ssdistnr")?.f64()?;
    assert_eq!(ssdistnr.get(2), Some(1.42));
    assert_eq!(ssdistnr.get(3), Some(-999.0));

    Ok(())
}

#[test]
fn alert_table_load_fails_on_malformed_json() {
    let path = fixture("light_curves.json");
    // wrong document shape for the alert table: must propagate as fatal
    assert!(load_alert_table(&path).is_err());
}

#[test]
fn light_curves_load_and_parse_both_band_encodings() {
    let light_curves =
        load_light_curves(&fixture("light_curves.json")).expect("light curve load failed");

    assert_eq!(light_curves.len(), 2);

    let curve = &light_curves["ZTF22aaajecp"];
    assert_eq!(curve.len(), 4);
    assert_eq!(curve[0].band, Band::G);
    assert_eq!(curve[2].band, Band::R); // numeric filter id 2

    // a truncated object simply has no key
    assert!(light_curves.get("ZTF22aamvpkq").is_none());
}
