// File: crates/pulse-core/src/gradient.rs
// Summary: Maps chart-space gradient stop positions into a path's normalized vertical span.

use kurbo::{BezPath, Point};
use peniko::Color;

use crate::geometry::finite_bounds;

/// Vertical gradient description in chart space: `(color, chart y)` pairs
/// sorted by descending position (top of chart first).
#[derive(Clone, Debug, Default)]
pub struct GradientSpec {
    pub stops: Vec<(Color, f64)>,
}

impl GradientSpec {
    pub fn new(stops: Vec<(Color, f64)>) -> Self {
        Self { stops }
    }
}

/// One stop resolved against a path's bounding box; `offset` is the
/// normalized [0, 1] location measured from the box's minimum y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub color: Color,
    pub offset: f64,
}

/// A gradient ready for the backend: stop offsets plus the chart-space
/// axis line the offsets run along.
#[derive(Clone, Debug)]
pub struct MappedGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

/// Resolve `spec` against the bounding box of `path`, inflated by half the
/// stroke width per side so cap extent is covered. An empty or non-finite
/// box skips the gradient entirely (`None`), never a crash.
pub fn map_gradient(path: &BezPath, stroke_width: f64, spec: &GradientSpec) -> Option<MappedGradient> {
    let b = finite_bounds(path)?.inflate(stroke_width * 0.5, stroke_width * 0.5);
    let span = b.y1 - b.y0;
    if !(span > 0.0) || !span.is_finite() {
        return None;
    }
    let cx = (b.x0 + b.x1) * 0.5;
    let stops = spec
        .stops
        .iter()
        .map(|&(color, y)| GradientStop {
            color,
            offset: ((y - b.y0) / span).clamp(0.0, 1.0),
        })
        .collect();
    Some(MappedGradient {
        start: Point::new(cx, b.y0),
        end: Point::new(cx, b.y1),
        stops,
    })
}
