// File: crates/demo/src/main.rs
// Summary: Demo renders a vitals-style series (gaps, threshold band, fills) to SVGs.

use anyhow::{Context, Result};
use peniko::Color;
use pulse_core::{
    FillStyle, GradientSpec, LineChart, LineMode, LineSeries, LineStyle, Sample, ThresholdBand,
};
use pulse_render_svg::SvgBackend;
use std::path::PathBuf;

fn main() -> Result<()> {
    let samples = heart_rate_samples();
    println!("Built {} samples (with one recording gap)", samples.len());

    let band = ThresholdBand::new(55.0, 120.0);
    let alert = Color::from_rgb8(220, 80, 80);

    let out_dir = PathBuf::from("target/out");

    // 1) Linear with alert partitioning and gap hints
    let style = LineStyle::default()
        .with_band(band, alert)
        .with_max_gap(30.0);
    render_variant(&samples, style, &out_dir.join("pulse_linear.svg"))?;

    // 2) Stepped with a solid fill split by the band
    let style = LineStyle::default()
        .with_mode(LineMode::Stepped)
        .with_band(band, alert)
        .with_max_gap(30.0)
        .with_fill(FillStyle::solid(Color::from_rgb8(64, 160, 255)).split_by_band());
    render_variant(&samples, style, &out_dir.join("pulse_stepped_fill.svg"))?;

    // 3) Cubic, single-colored by design
    let style = LineStyle::default()
        .with_mode(LineMode::Cubic)
        .with_max_gap(30.0);
    render_variant(&samples, style, &out_dir.join("pulse_cubic.svg"))?;

    // 4) Horizontal bezier with a gradient fill
    let gradient = GradientSpec::new(vec![
        (Color::from_rgb8(220, 80, 80), 150.0),
        (Color::from_rgb8(64, 160, 255), 80.0),
        (Color::from_rgb8(40, 200, 120), 40.0),
    ]);
    let style = LineStyle::default()
        .with_mode(LineMode::Horizontal)
        .with_max_gap(30.0)
        .with_fill(FillStyle::gradient(gradient).with_baseline(40.0));
    render_variant(&samples, style, &out_dir.join("pulse_horizontal_gradient.svg"))?;

    Ok(())
}

fn render_variant(samples: &[Sample], style: LineStyle, out: &PathBuf) -> Result<()> {
    let mut chart = LineChart::new();
    chart.add_series(LineSeries::new(samples.to_vec(), style));
    let view = chart.autoscale();
    let mut backend = SvgBackend::new(1024.0, 640.0, &view);
    chart
        .render(&view, &mut backend)
        .with_context(|| format!("rendering {}", out.display()))?;
    backend
        .write_svg(out)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Synthetic resting/exercise heart rate trace: one isolated reading and a
/// long dropout so gap breaking and lone-point rendering both show up.
fn heart_rate_samples() -> Vec<Sample> {
    let mut out = Vec::new();
    let mut x = 0.0;
    for i in 0..240 {
        let base = 72.0 + 12.0 * (i as f64 * 0.07).sin();
        let spike = if (90..110).contains(&i) { 52.0 } else { 0.0 };
        let dip = if (170..185).contains(&i) { -22.0 } else { 0.0 };
        out.push(Sample::new(x, base + spike + dip));
        x += 5.0;
        // dropout: skip a stretch of readings after sample 60
        if i == 60 {
            x += 200.0;
        }
        // a second, single-sample island
        if i == 140 {
            x += 120.0;
            out.push(Sample::new(x, 98.0));
            x += 120.0;
        }
    }
    out
}
