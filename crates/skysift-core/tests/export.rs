use skysift_core::evolution::{EvolutionReport, FastEvolver, RateEstimate};
use skysift_core::export::write_candidate_csv;
use skysift_core::lightcurve::Band;

#[test]
fn writes_one_row_per_flagged_candidate() {
    let report = EvolutionReport {
        flagged: vec![FastEvolver {
            object_id: "ZTF22aaajecp".to_string(),
            band: Band::G,
            rate: RateEstimate {
                mag_span: 1.53,
                day_span: 5.06,
                rate_mag_per_day: 0.302371,
            },
            detections: 4,
        }],
        missing: vec!["ZTF22aamvpkq".to_string()],
        scanned: 2,
    };

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("candidates.csv");

    write_candidate_csv(&report, &path).expect("csv write failed");

    let text = std::fs::read_to_string(&path).expect("csv read failed");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("objectId,band,rate_mag_per_day,mag_span,day_span,detections"),
    );
    assert_eq!(lines.next(), Some("ZTF22aaajecp,g,0.3024,1.5300,5.0600,4"));
    assert_eq!(lines.next(), None);
}
