use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use polars::prelude::*;
use serde::Deserialize;

use crate::error::Result;

/// Julian date of the Unix epoch, 1970-01-01T00:00:00Z.
const JD_UNIX_EPOCH: f64 = 2_440_587.5;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// One row of the alert metadata table.
///
/// `object_id` is not unique: a single object usually has many alerts. The
/// survey pipeline uses -999 in `ssdistnr` as a "no solar-system match"
/// sentinel, which is preserved as-is here and interpreted by the filters.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertRecord {
    #[serde(rename = "objectId")]
    pub object_id: String,
    pub ndethist: i64,
    pub sgscore1: Option<f64>,
    pub distpsnr1: Option<f64>,
    pub ssdistnr: Option<f64>,
    pub jd: f64,
    pub jdstarthist: Option<f64>,
    #[serde(default)]
    pub drb: Option<f64>,
}

/// Load the alert table from a JSON document keyed by alert id (candid).
///
/// Malformed JSON or type mismatches are fatal and propagate to the caller.
/// Row order follows the candid ordering of the source map.
pub fn load_alert_table(path: &Path) -> Result<DataFrame> {
    let text = std::fs::read_to_string(path)?;
    let records: BTreeMap<String, AlertRecord> = serde_json::from_str(&text)?;
    dataframe_from_records(&records)
}

pub fn dataframe_from_records(records: &BTreeMap<String, AlertRecord>) -> Result<DataFrame> {
    let len = records.len();

    let mut candid = Vec::with_capacity(len);
    let mut object_id = Vec::with_capacity(len);
    let mut ndethist = Vec::with_capacity(len);
    let mut sgscore1 = Vec::with_capacity(len);
    let mut distpsnr1 = Vec::with_capacity(len);
    let mut ssdistnr = Vec::with_capacity(len);
    let mut jd = Vec::with_capacity(len);
    let mut jdstarthist = Vec::with_capacity(len);
    let mut drb = Vec::with_capacity(len);

    for (id, record) in records {
        candid.push(id.as_str());
        object_id.push(record.object_id.as_str());
        ndethist.push(record.ndethist);
        sgscore1.push(record.sgscore1);
        distpsnr1.push(record.distpsnr1);
        ssdistnr.push(record.ssdistnr);
        jd.push(record.jd);
        jdstarthist.push(record.jdstarthist);
        drb.push(record.drb);
    }

    let df = DataFrame::new(vec![
        Series::new("candid".into(), candid).into(),
        Series::new("objectId".into(), object_id).into(),
        Series::new("ndethist".into(), ndethist).into(),
        Series::new("sgscore1".into(), sgscore1).into(),
        Series::new("distpsnr1".into(), distpsnr1).into(),
        Series::new("ssdistnr".into(), ssdistnr).into(),
        Series::new("jd".into(), jd).into(),
        Series::new("jdstarthist".into(), jdstarthist).into(),
        Series::new("drb".into(), drb).into(),
    ])?;

    Ok(df)
}

/// Convert a Julian date to UTC, for console display only.
pub fn jd_to_datetime(jd: f64) -> Option<DateTime<Utc>> {
    if !jd.is_finite() {
        return None;
    }
    let millis = ((jd - JD_UNIX_EPOCH) * MILLIS_PER_DAY).round() as i64;
    Utc.timestamp_millis_opt(millis).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jd_epoch_maps_to_unix_epoch() {
        let dt = jd_to_datetime(JD_UNIX_EPOCH).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn jd_noon_offset_is_half_a_day() {
        let dt = jd_to_datetime(JD_UNIX_EPOCH + 0.5).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(1970, 1, 1, 12, 0, 0).unwrap());
    }
}
