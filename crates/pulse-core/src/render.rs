// File: crates/pulse-core/src/render.rs
// Summary: Renderer-agnostic backend seam the draw pass hands geometry to.

use kurbo::{BezPath, Point, Rect};
use peniko::Color;

use crate::gradient::MappedGradient;

/// Stroke parameters for a single backend call.
#[derive(Clone, Debug)]
pub struct StrokePaint {
    pub color: Color,
    pub width: f64,
    /// Dash lengths; absent means a solid stroke.
    pub dash: Option<Vec<f64>>,
}

impl StrokePaint {
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(color: Color, width: f64, dash: Vec<f64>) -> Self {
        Self { color, width, dash: Some(dash) }
    }
}

/// Drawing surface abstraction. All coordinates arriving here are logical
/// (pre-transform); implementations own the mapping to device space.
pub trait RenderBackend {
    /// Stroke many disjoint two-point segments in one call.
    fn stroke_segments(&mut self, segments: &[[Point; 2]], paint: &StrokePaint);

    /// Stroke a connected path (polyline or Bezier).
    fn stroke_path(&mut self, path: &BezPath, paint: &StrokePaint);

    /// Fill a closed path with a flat color at `alpha`.
    fn fill_path(&mut self, path: &BezPath, color: Color, alpha: f32);

    /// Fill a closed path with a resolved vertical gradient at `alpha`.
    fn fill_path_gradient(&mut self, path: &BezPath, gradient: &MappedGradient, alpha: f32);

    /// Filled circle marker.
    fn draw_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Restrict subsequent drawing to `rect`; `None` clears the clip.
    fn set_clip(&mut self, rect: Option<Rect>);
}
