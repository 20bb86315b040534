// File: crates/pulse-core/src/view.rs
// Summary: View state: visible ranges, autoscale, and the logical plot rect.

use kurbo::Rect;

use crate::chart::LineSeries;

/// Visible data-space ranges for one draw pass.
#[derive(Clone, Copy, Debug)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Ranges covering all series data, the fill baselines, and any set
    /// bounds of enabled threshold bands, with a small vertical margin.
    pub fn from_series(series: &[LineSeries]) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in series {
            for sample in s.data.samples() {
                x_min = x_min.min(sample.x);
                x_max = x_max.max(sample.x);
                y_min = y_min.min(sample.y);
                y_max = y_max.max(sample.y);
            }
            if let Some(fill) = &s.style.fill {
                let b = fill.baseline_value();
                y_min = y_min.min(b);
                y_max = y_max.max(b);
            }
            let band = &s.style.band;
            if band.enabled {
                if band.upper_set() {
                    y_min = y_min.min(band.upper);
                    y_max = y_max.max(band.upper);
                }
                if band.lower_set() {
                    y_min = y_min.min(band.lower);
                    y_max = y_max.max(band.lower);
                }
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self::new(0.0, 1.0, 0.0, 1.0);
        }
        let mut x_max = x_max;
        let mut y_max = y_max;
        if (x_max - x_min).abs() < 1e-9 {
            x_max = x_min + 1.0;
        }
        if (y_max - y_min).abs() < 1e-9 {
            y_max = y_min + 1.0;
        }
        let m = (y_max - y_min) * 0.02;
        Self::new(x_min, x_max, y_min - m, y_max + m)
    }

    /// Logical-space plot rect (y up); band clip regions partition this.
    pub fn plot_rect(&self) -> Rect {
        Rect::new(self.x_min, self.y_min, self.x_max, self.y_max)
    }
}
