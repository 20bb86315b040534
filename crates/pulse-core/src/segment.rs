// File: crates/pulse-core/src/segment.rs
// Summary: Segment partitioner: gap breaking, color classification, and gap dash hints.

use kurbo::Point;

use crate::sample::{SampleSource, Sample};
use crate::threshold::{PointClass, ThresholdBand};

/// Maximal run of sample indices `[start, end]` with no internal x-gap
/// above the configured maximum. Transient per draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    /// A segment isolated down to a single sample; rendered as a marker,
    /// not a polyline or fill member.
    #[inline]
    pub fn is_lone(&self) -> bool {
        self.start == self.end
    }

    /// Number of samples covered (always at least 1).
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Split the index window `[lo, hi]` into segments. `max_gap == 0`
/// disables gap breaking and yields one segment covering the window.
pub fn partition(source: &dyn SampleSource, lo: usize, hi: usize, max_gap: f64) -> Vec<Segment> {
    let mut out = Vec::new();
    if source.count() == 0 || lo > hi {
        return out;
    }
    let hi = hi.min(source.count() - 1);
    let mut start = lo;
    if max_gap > 0.0 {
        for i in lo..hi {
            let (Some(a), Some(b)) = (source.at(i), source.at(i + 1)) else {
                break;
            };
            if b.x - a.x > max_gap {
                out.push(Segment { start, end: i });
                start = i + 1;
            }
        }
    }
    out.push(Segment { start, end: hi });
    out
}

/// Vertex run of a segment. Stepped mode inserts, before each vertex, an
/// intermediate point holding the previous y at the new x.
/// `out` is a reusable buffer; it is cleared first.
pub fn segment_vertices(
    source: &dyn SampleSource,
    seg: Segment,
    stepped: bool,
    out: &mut Vec<Point>,
) {
    out.clear();
    for i in seg.start..=seg.end {
        let Some(s) = source.at(i) else { continue };
        let p = Point::new(s.x, s.y);
        if stepped {
            if let Some(&prev) = out.last() {
                out.push(Point::new(p.x, prev.y));
            }
        }
        out.push(p);
    }
}

/// Flat vertex-pair batches, one per color class, so a backend can stroke
/// many disjoint segments in one call. Each mixed-class transition breaks
/// continuity: color changes demand separate strokes.
#[derive(Clone, Debug, Default)]
pub struct ClassifiedStrokes {
    pub normal: Vec<[Point; 2]>,
    pub alert: Vec<[Point; 2]>,
}

impl ClassifiedStrokes {
    pub fn clear(&mut self) {
        self.normal.clear();
        self.alert.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.normal.is_empty() && self.alert.is_empty()
    }

    fn push(&mut self, class: PointClass, a: Point, b: Point) {
        match class {
            PointClass::Normal => self.normal.push([a, b]),
            PointClass::Alert => self.alert.push([a, b]),
        }
    }

    /// Classify consecutive vertex pairs against `band`. Same-class pairs
    /// are emitted whole; mixed pairs split at the interpolated crossing,
    /// each half joining its endpoint's batch. A vertically degenerate
    /// mixed pair falls back to Normal.
    pub fn classify(&mut self, vertices: &[Point], band: &ThresholdBand) {
        for w in vertices.windows(2) {
            let (a, b) = (w[0], w[1]);
            let ca = band.classify(a.y);
            let cb = band.classify(b.y);
            if ca == cb {
                self.push(ca, a, b);
                continue;
            }
            match band.crossing(a, b) {
                Some(cross) => {
                    self.push(ca, a, cross);
                    self.push(cb, cross, b);
                }
                None => self.push(PointClass::Normal, a, b),
            }
        }
    }
}

/// One dashed hint (or half-hint) spanning a gap between segments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GapDash {
    pub from: Point,
    pub to: Point,
    pub class: PointClass,
}

fn sample_point(s: Sample) -> Point {
    Point::new(s.x, s.y)
}

/// Dashed hints across the gaps between consecutive segments. With an
/// enabled band, each endpoint classifies its own half of the hint and
/// differing classes split the hint at the crossing. Without a band the
/// hint keeps the base class even when the gap spans a threshold.
pub fn gap_dashes(
    source: &dyn SampleSource,
    segments: &[Segment],
    band: Option<&ThresholdBand>,
) -> Vec<GapDash> {
    let mut out = Vec::new();
    for pair in segments.windows(2) {
        let (Some(a), Some(b)) = (source.at(pair[0].end), source.at(pair[1].start)) else {
            continue;
        };
        let (pa, pb) = (sample_point(a), sample_point(b));
        match band {
            Some(band) if band.enabled => {
                let ca = band.classify(pa.y);
                let cb = band.classify(pb.y);
                if ca == cb {
                    out.push(GapDash { from: pa, to: pb, class: ca });
                } else if let Some(cross) = band.crossing(pa, pb) {
                    out.push(GapDash { from: pa, to: cross, class: ca });
                    out.push(GapDash { from: cross, to: pb, class: cb });
                } else {
                    out.push(GapDash { from: pa, to: pb, class: PointClass::Normal });
                }
            }
            _ => out.push(GapDash { from: pa, to: pb, class: PointClass::Normal }),
        }
    }
    out
}
