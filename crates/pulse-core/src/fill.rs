// File: crates/pulse-core/src/fill.rs
// Summary: Fill polygon builder: baseline-closed polygons, chunking, and band clip regions.

use kurbo::{BezPath, Point, Rect};

use crate::threshold::ThresholdBand;

/// Vertex budget per fill chunk. Adjacent chunks share their boundary
/// vertex so independently closed chunks meet without a seam.
pub const FILL_CHUNK_VERTICES: usize = 128;

/// Fill geometry for one vertex run.
#[derive(Clone, Debug)]
pub enum FillShape {
    /// Closed polygons, one per chunk. Empty for an empty run.
    Polygons(Vec<BezPath>),
    /// Degenerate single-sample run: a baseline-to-sample vertical line
    /// plus a point marker instead of a zero-area polygon.
    Marker { line: [Point; 2], center: Point },
}

/// Build the area-fill geometry for a vertex run against `baseline`.
/// The run is the already-refined polyline (stepped refinement included),
/// so fills stay coherent with the stroke they sit under.
pub fn fill_shape(vertices: &[Point], baseline: f64) -> FillShape {
    match vertices {
        [] => FillShape::Polygons(Vec::new()),
        [p] => FillShape::Marker {
            line: [Point::new(p.x, baseline), *p],
            center: *p,
        },
        _ => FillShape::Polygons(fill_polygons(vertices, baseline)),
    }
}

/// Closed polygons for a run of at least two vertices:
/// `(x0, baseline) -> (x0, y0) -> ... -> (xe, baseline) -> close`,
/// chunked for renderer efficiency.
fn fill_polygons(vertices: &[Point], baseline: f64) -> Vec<BezPath> {
    let mut out = Vec::new();
    let last = vertices.len() - 1;
    let mut i = 0;
    while i < last {
        let end = (i + FILL_CHUNK_VERTICES).min(last);
        let mut path = BezPath::new();
        path.move_to(Point::new(vertices[i].x, baseline));
        for &v in &vertices[i..=end] {
            path.line_to(v);
        }
        path.line_to(Point::new(vertices[end].x, baseline));
        path.close_path();
        out.push(path);
        i = end;
    }
    out
}

/// Plot-rect partition used to composite an alert-band fill: the one fill
/// polygon is drawn repeatedly under these clips instead of being
/// re-partitioned by color.
#[derive(Clone, Copy, Debug)]
pub struct ClipRegions {
    /// Region above the upper bound, when that bound is set.
    pub above: Option<Rect>,
    /// Region below the lower bound, when that bound is set.
    pub below: Option<Rect>,
    /// Remaining normal region between the bounds.
    pub between: Rect,
}

/// Split `plot` (logical space, y up) along the band's bounds.
pub fn clip_regions(band: &ThresholdBand, plot: Rect) -> ClipRegions {
    let upper_edge = if band.upper_set() {
        band.upper.clamp(plot.y0, plot.y1)
    } else {
        plot.y1
    };
    let lower_edge = if band.lower_set() {
        band.lower.clamp(plot.y0, plot.y1)
    } else {
        plot.y0
    };
    ClipRegions {
        above: band
            .upper_set()
            .then(|| Rect::new(plot.x0, upper_edge, plot.x1, plot.y1)),
        below: band
            .lower_set()
            .then(|| Rect::new(plot.x0, plot.y0, plot.x1, lower_edge)),
        between: Rect::new(plot.x0, lower_edge, plot.x1, upper_edge),
    }
}
