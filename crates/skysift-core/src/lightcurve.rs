use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Photometric band of a detection.
///
/// Prepared files carry the band either as a string code ("g", "r", "i") or
/// as the survey's numeric filter id (1, 2, 3); both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    G,
    R,
    I,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::G, Band::R, Band::I];

    pub fn as_str(&self) -> &'static str {
        match self {
            Band::G => "g",
            Band::R => "r",
            Band::I => "i",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Band {
    type Error = String;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "g" | "1" => Ok(Band::G),
            "r" | "2" => Ok(Band::R),
            "i" | "3" => Ok(Band::I),
            other => Err(format!("unknown photometric band '{other}'")),
        }
    }
}

impl TryFrom<u64> for Band {
    type Error = String;

    fn try_from(value: u64) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Band::G),
            2 => Ok(Band::R),
            3 => Ok(Band::I),
            other => Err(format!("unknown filter id {other}")),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BandRepr {
    Code(u64),
    Name(String),
}

impl<'de> Deserialize<'de> for Band {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match BandRepr::deserialize(deserializer)? {
            BandRepr::Code(id) => Band::try_from(id).map_err(de::Error::custom),
            BandRepr::Name(name) => Band::try_from(name.as_str()).map_err(de::Error::custom),
        }
    }
}

/// One photometric detection of an object.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Detection {
    pub jd: f64,
    #[serde(rename = "filter")]
    pub band: Band,
    pub magpsf: f64,
    pub sigmapsf: f64,
}

/// Per-object light curves keyed by object id.
///
/// Some object ids are deliberately truncated out of the prepared file
/// upstream, so lookups must tolerate missing keys.
pub type LightCurves = HashMap<String, Vec<Detection>>;

pub fn load_light_curves(path: &Path) -> Result<LightCurves> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Group detections by band, in the fixed band order, skipping empty bands.
pub fn by_band(detections: &[Detection]) -> Vec<(Band, Vec<&Detection>)> {
    Band::ALL
        .iter()
        .filter_map(|&band| {
            let points: Vec<&Detection> =
                detections.iter().filter(|det| det.band == band).collect();
            if points.is_empty() {
                None
            } else {
                Some((band, points))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_parses_string_and_numeric_codes() {
        assert_eq!(Band::try_from("g").unwrap(), Band::G);
        assert_eq!(Band::try_from(" R ").unwrap(), Band::R);
        assert_eq!(Band::try_from(3u64).unwrap(), Band::I);
        assert!(Band::try_from("z").is_err());
        assert!(Band::try_from(4u64).is_err());
    }

    #[test]
    fn detection_accepts_both_band_encodings() {
        let named: Detection =
            serde_json::from_str(r#"{"jd": 2459760.5, "filter": "g", "magpsf": 18.2, "sigmapsf": 0.05}"#)
                .unwrap();
        assert_eq!(named.band, Band::G);

        let coded: Detection =
            serde_json::from_str(r#"{"jd": 2459760.5, "filter": 2, "magpsf": 18.2, "sigmapsf": 0.05}"#)
                .unwrap();
        assert_eq!(coded.band, Band::R);
    }

    #[test]
    fn by_band_keeps_fixed_order_and_skips_empty_bands() {
        let detections = vec![
            Detection { jd: 1.0, band: Band::R, magpsf: 18.0, sigmapsf: 0.1 },
            Detection { jd: 2.0, band: Band::G, magpsf: 19.0, sigmapsf: 0.1 },
            Detection { jd: 3.0, band: Band::R, magpsf: 17.5, sigmapsf: 0.1 },
        ];

        let grouped = by_band(&detections);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, Band::G);
        assert_eq!(grouped[0].1.len(), 1);
        assert_eq!(grouped[1].0, Band::R);
        assert_eq!(grouped[1].1.len(), 2);
    }
}
