// File: crates/pulse-core/src/threshold.rs
// Summary: Threshold band model: alert classification and crossing interpolation.

use kurbo::Point;

use crate::geometry::{lerp, CROSSING_EPS};

/// Color bucket of a stroke vertex relative to the threshold band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointClass {
    Normal,
    Alert,
}

/// Optional lower/upper alert bounds. A NaN bound means that side never
/// triggers; `enabled` gates alert partitioning as a whole.
/// Configured once per draw pass; immutable while rendering.
#[derive(Clone, Copy, Debug)]
pub struct ThresholdBand {
    pub lower: f64,
    pub upper: f64,
    pub enabled: bool,
}

impl Default for ThresholdBand {
    fn default() -> Self {
        Self { lower: f64::NAN, upper: f64::NAN, enabled: false }
    }
}

impl ThresholdBand {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper, enabled: true }
    }

    pub fn upper_only(upper: f64) -> Self {
        Self { lower: f64::NAN, upper, enabled: true }
    }

    pub fn lower_only(lower: f64) -> Self {
        Self { lower, upper: f64::NAN, enabled: true }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    #[inline]
    pub fn upper_set(&self) -> bool {
        !self.upper.is_nan()
    }

    #[inline]
    pub fn lower_set(&self) -> bool {
        !self.lower.is_nan()
    }

    /// True iff `y` lies above the upper bound or below the lower bound.
    #[inline]
    pub fn is_alert(&self, y: f64) -> bool {
        if !self.enabled {
            return false;
        }
        (self.upper_set() && y > self.upper) || (self.lower_set() && y < self.lower)
    }

    #[inline]
    pub fn classify(&self, y: f64) -> PointClass {
        if self.is_alert(y) {
            PointClass::Alert
        } else {
            PointClass::Normal
        }
    }

    /// The bound strictly sign-crossed between `y1` and `y2`.
    /// Upper is tested before lower; keep that order.
    pub fn crossed_bound(&self, y1: f64, y2: f64) -> Option<f64> {
        if self.upper_set() && (y1 - self.upper) * (y2 - self.upper) < 0.0 {
            return Some(self.upper);
        }
        if self.lower_set() && (y1 - self.lower) * (y2 - self.lower) < 0.0 {
            return Some(self.lower);
        }
        None
    }

    /// Interpolated crossing point between `a` and `b`, or `None` when no
    /// bound is crossed or the pair is vertically degenerate. `t` is clamped
    /// into [0, 1] to absorb floating-point error; x and y are each
    /// interpolated at `t` (thresholds live in y-space).
    pub fn crossing(&self, a: Point, b: Point) -> Option<Point> {
        let bound = self.crossed_bound(a.y, b.y)?;
        let dy = b.y - a.y;
        if dy.abs() < CROSSING_EPS {
            return None;
        }
        let t = ((bound - a.y) / dy).clamp(0.0, 1.0);
        Some(Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t)))
    }
}
