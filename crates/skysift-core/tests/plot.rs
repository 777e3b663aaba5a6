use skysift_core::lightcurve::{Band, Detection};
use skysift_core::plot::render_light_curve;

fn det(jd: f64, band: Band, magpsf: f64) -> Detection {
    Detection {
        jd,
        band,
        magpsf,
        sigmapsf: 0.08,
    }
}

#[test]
fn renders_a_two_band_curve_to_png() {
    let detections = vec![
        det(2459755.69, Band::G, 19.84),
        det(2459758.71, Band::G, 18.92),
        det(2459760.75, Band::R, 18.31),
        det(2459761.72, Band::R, 18.64),
    ];

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ZTF22aaajecp.png");

    render_light_curve("ZTF22aaajecp", &detections, &path).expect("plot render failed");

    let metadata = std::fs::metadata(&path).expect("plot file missing");
    assert!(metadata.len() > 0);
}

#[test]
fn refuses_an_empty_light_curve() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.png");

    assert!(render_light_curve("empty", &[], &path).is_err());
    assert!(!path.exists());
}
