// File: crates/pulse-core/src/curve.rs
// Summary: Stroke geometry for the four line modes (linear, stepped, cubic, horizontal).

use kurbo::{BezPath, Point};

/// Clamp range for the cubic control-point intensity.
pub const MIN_CUBIC_INTENSITY: f64 = 0.05;
pub const MAX_CUBIC_INTENSITY: f64 = 1.0;

/// Straight vertex-to-vertex path. Fewer than two points yields an empty
/// path. Stepped mode feeds this the refined vertex run from
/// `segment_vertices`, so the same builder covers both modes.
pub fn linear_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if points.len() < 2 {
        return path;
    }
    path.move_to(points[0]);
    for &p in &points[1..] {
        path.line_to(p);
    }
    path
}

/// Cubic Bezier through the points using a 4-point sliding window.
/// Control points: `prev + (cur - prev_prev) * intensity` and
/// `cur - (next - prev) * intensity`. The first and last samples reuse
/// themselves as their missing neighbor, which flattens curvature at the
/// ends on purpose. Curves carry a single color; alert splitting does not
/// apply here.
pub fn cubic_path(points: &[Point], intensity: f64) -> BezPath {
    let mut path = BezPath::new();
    let n = points.len();
    if n < 2 {
        return path;
    }
    let intensity = intensity.clamp(MIN_CUBIC_INTENSITY, MAX_CUBIC_INTENSITY);
    path.move_to(points[0]);
    for i in 1..n {
        let prev_prev = points[i.saturating_sub(2)];
        let prev = points[i - 1];
        let cur = points[i];
        let next = points[(i + 1).min(n - 1)];
        let c1 = Point::new(
            prev.x + (cur.x - prev_prev.x) * intensity,
            prev.y + (cur.y - prev_prev.y) * intensity,
        );
        let c2 = Point::new(
            cur.x - (next.x - prev.x) * intensity,
            cur.y - (next.y - prev.y) * intensity,
        );
        path.curve_to(c1, c2, cur);
    }
    path
}

/// Bezier where both control points of each span sit at the pair's
/// x-midpoint at their own endpoint's y, giving zero vertical tangent at
/// every sample ("stairstep smoothing").
pub fn horizontal_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let n = points.len();
    if n < 2 {
        return path;
    }
    path.move_to(points[0]);
    for i in 1..n {
        let prev = points[i - 1];
        let cur = points[i];
        let mid_x = prev.x + (cur.x - prev.x) * 0.5;
        path.curve_to(
            Point::new(mid_x, prev.y),
            Point::new(mid_x, cur.y),
            cur,
        );
    }
    path
}
