// File: crates/pulse-core/src/geometry.rs
// Summary: Small numeric helpers shared by the partitioner, curves, and gradient mapper.

use kurbo::{BezPath, Rect, Shape};

/// Denominator guard for crossing interpolation; below this the pair is
/// treated as non-crossing.
pub const CROSSING_EPS: f64 = 1e-6;

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Bounding box of a path, or `None` when the path is empty or any corner
/// is non-finite.
pub fn finite_bounds(path: &BezPath) -> Option<Rect> {
    if path.elements().is_empty() {
        return None;
    }
    let b = path.bounding_box();
    if b.x0.is_finite() && b.y0.is_finite() && b.x1.is_finite() && b.y1.is_finite() {
        Some(b)
    } else {
        None
    }
}
