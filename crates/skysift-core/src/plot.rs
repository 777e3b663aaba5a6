use std::path::Path;

use anyhow::{anyhow, Context, Result};
use plotters::prelude::*;

use crate::lightcurve::{by_band, Band, Detection};

const PLOT_SIZE: (u32, u32) = (900, 600);
const ERROR_BAR_WIDTH: u32 = 6;

fn band_color(band: Band) -> RGBColor {
    match band {
        Band::G => RGBColor(46, 139, 87),
        Band::R => RGBColor(178, 34, 34),
        Band::I => RGBColor(72, 61, 139),
    }
}

/// Render one object's light curve to a PNG file.
///
/// One error-bar series per band with a single legend entry each, x axis in
/// days since the first detection, magnitude axis inverted so that
/// brightness increases upward. Purely presentational; no state is kept
/// between calls.
pub fn render_light_curve(object_id: &str, detections: &[Detection], path: &Path) -> Result<()> {
    if detections.is_empty() {
        return Err(anyhow!("no detections to plot for {object_id}"));
    }

    let jd_first = detections.iter().map(|det| det.jd).fold(f64::INFINITY, f64::min);
    let jd_last = detections
        .iter()
        .map(|det| det.jd)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut mag_bright = f64::INFINITY;
    let mut mag_faint = f64::NEG_INFINITY;
    for det in detections {
        mag_bright = mag_bright.min(det.magpsf - det.sigmapsf);
        mag_faint = mag_faint.max(det.magpsf + det.sigmapsf);
    }

    let x_pad = (jd_last - jd_first).max(0.5) * 0.05;
    let y_pad = (mag_faint - mag_bright).max(0.2) * 0.08;

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).context("failed to clear plot background")?;

    let mut chart = ChartBuilder::on(&root)
        .caption(object_id, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(42)
        .y_label_area_size(54)
        // reversed y range inverts the magnitude axis
        .build_cartesian_2d(
            -x_pad..(jd_last - jd_first + x_pad),
            (mag_faint + y_pad)..(mag_bright - y_pad),
        )
        .context("failed to build chart axes")?;

    chart
        .configure_mesh()
        .x_desc("days since first detection")
        .y_desc("magnitude")
        .draw()
        .context("failed to draw axes")?;

    for (band, points) in by_band(detections) {
        let color = band_color(band);
        chart
            .draw_series(points.iter().map(|det| {
                ErrorBar::new_vertical(
                    det.jd - jd_first,
                    det.magpsf - det.sigmapsf,
                    det.magpsf,
                    det.magpsf + det.sigmapsf,
                    color.filled(),
                    ERROR_BAR_WIDTH,
                )
            }))
            .with_context(|| format!("failed to draw {band}-band series"))?
            .label(band.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x - 8, y), (x + 8, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()
        .context("failed to draw legend")?;

    root.present()
        .with_context(|| format!("failed to write plot to {}", path.display()))?;

    Ok(())
}
