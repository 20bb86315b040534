// File: crates/pulse-core/src/style.rs
// Summary: Read-only styling configuration consumed by one draw pass.

use peniko::Color;

use crate::gradient::GradientSpec;
use crate::threshold::ThresholdBand;

/// Stroke interpolation mode for a series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineMode {
    Linear,
    /// Horizontal step to the new x before rising to the new y.
    Stepped,
    /// 4-point sliding-window cubic Bezier.
    Cubic,
    /// Midpoint-anchored Bezier with horizontal tangents at each sample.
    Horizontal,
}

/// Fill paint: a flat color or a vertical gradient.
#[derive(Clone, Debug)]
pub enum FillPaint {
    Solid(Color),
    Gradient(GradientSpec),
}

/// Area fill configuration.
#[derive(Clone, Debug)]
pub struct FillStyle {
    pub paint: FillPaint,
    pub alpha: f32,
    /// Baseline y the fill closes to; absent means 0.
    pub baseline: Option<f64>,
    /// Composite the fill under band clip regions (normal between the
    /// bounds, alert color above/below).
    pub split_by_band: bool,
}

impl FillStyle {
    pub fn solid(color: Color) -> Self {
        Self { paint: FillPaint::Solid(color), alpha: 0.35, baseline: None, split_by_band: false }
    }

    pub fn gradient(spec: GradientSpec) -> Self {
        Self { paint: FillPaint::Gradient(spec), alpha: 0.35, baseline: None, split_by_band: false }
    }

    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = Some(baseline);
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn split_by_band(mut self) -> Self {
        self.split_by_band = true;
        self
    }

    /// Baseline value or the default (0.0) when not set.
    pub fn baseline_value(&self) -> f64 {
        self.baseline.unwrap_or(0.0)
    }
}

/// Per-series styling, read-only during a draw pass.
#[derive(Clone, Debug)]
pub struct LineStyle {
    pub mode: LineMode,
    pub color: Color,
    pub width: f64,
    /// Dash lengths for the stroke; absent means solid.
    pub dash: Option<Vec<f64>>,
    /// Cubic control intensity; clamped into [0.05, 1.0] at use.
    pub cubic_intensity: f64,
    /// Maximum x-distance between connected samples; 0 disables gap breaking.
    pub max_gap: f64,
    pub band: ThresholdBand,
    pub alert_color: Color,
    /// Radius of lone-point and marker circles.
    pub circle_radius: f64,
    pub fill: Option<FillStyle>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            mode: LineMode::Linear,
            color: Color::from_rgb8(64, 160, 255),
            width: 2.0,
            dash: None,
            cubic_intensity: 0.2,
            max_gap: 0.0,
            band: ThresholdBand::disabled(),
            alert_color: Color::from_rgb8(220, 80, 80),
            circle_radius: 3.0,
            fill: None,
        }
    }
}

impl LineStyle {
    pub fn with_mode(mut self, mode: LineMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_band(mut self, band: ThresholdBand, alert_color: Color) -> Self {
        self.band = band;
        self.alert_color = alert_color;
        self
    }

    pub fn with_max_gap(mut self, max_gap: f64) -> Self {
        self.max_gap = max_gap;
        self
    }

    pub fn with_fill(mut self, fill: FillStyle) -> Self {
        self.fill = Some(fill);
        self
    }
}
