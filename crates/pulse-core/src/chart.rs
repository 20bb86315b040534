// File: crates/pulse-core/src/chart.rs
// Summary: Chart model and the synchronous draw pass handing geometry to a backend.

use kurbo::Point;
use peniko::Color;

use crate::curve::{cubic_path, horizontal_path, linear_path};
use crate::error::ChartError;
use crate::fill::{clip_regions, fill_shape, FillShape};
use crate::gradient::map_gradient;
use crate::render::{RenderBackend, StrokePaint};
use crate::sample::{Sample, SampleSource, VecSampleSource};
use crate::segment::{gap_dashes, partition, segment_vertices, ClassifiedStrokes, Segment};
use crate::style::{FillPaint, FillStyle, LineMode, LineStyle};
use crate::threshold::PointClass;
use crate::view::ViewState;

/// Dash lengths for gap hints when the style itself has no dash pattern.
const GAP_HINT_DASH: [f64; 2] = [4.0, 4.0];

/// One line series: sample data plus its styling.
#[derive(Clone, Debug)]
pub struct LineSeries {
    pub data: VecSampleSource,
    pub style: LineStyle,
}

impl LineSeries {
    pub fn new(samples: Vec<Sample>, style: LineStyle) -> Self {
        Self { data: VecSampleSource::new(samples), style }
    }

    pub fn from_xy(data: &[(f64, f64)], style: LineStyle) -> Self {
        Self { data: VecSampleSource::from_xy(data), style }
    }
}

/// A chart holding any number of line series.
#[derive(Clone, Debug, Default)]
pub struct LineChart {
    pub series: Vec<LineSeries>,
}

impl LineChart {
    pub fn new() -> Self {
        Self { series: Vec::new() }
    }

    pub fn add_series(&mut self, series: LineSeries) {
        self.series.push(series);
    }

    /// View covering all data, baselines, and enabled band bounds.
    pub fn autoscale(&self) -> ViewState {
        ViewState::from_series(&self.series)
    }

    /// Execute one full draw pass: partition, generate, fill, gradient,
    /// backend handoff. Runs to completion on the calling thread; the only
    /// error is a configuration mistake, every data condition degrades to
    /// empty geometry.
    pub fn render(&self, view: &ViewState, backend: &mut dyn RenderBackend) -> Result<(), ChartError> {
        for series in &self.series {
            draw_series(series, view, backend)?;
        }
        Ok(())
    }
}

// ---- draw pass --------------------------------------------------------------

/// Per-pass scratch buffers, reused across segments of one series.
#[derive(Default)]
struct DrawScratch {
    vertices: Vec<Point>,
    strokes: ClassifiedStrokes,
}

fn draw_series(
    series: &LineSeries,
    view: &ViewState,
    backend: &mut dyn RenderBackend,
) -> Result<(), ChartError> {
    let style = &series.style;
    if let Some(FillStyle { paint: FillPaint::Gradient(spec), .. }) = &style.fill {
        if spec.stops.is_empty() {
            return Err(ChartError::MissingGradientStops);
        }
    }

    let Some((lo, hi)) = series.data.visible_window(view.x_min, view.x_max) else {
        return Ok(());
    };
    let segments = partition(&series.data, lo, hi, style.max_gap);
    let stepped = style.mode == LineMode::Stepped;
    let mut scratch = DrawScratch::default();

    for seg in &segments {
        if seg.is_lone() {
            draw_lone_point(series, *seg, backend);
            continue;
        }
        segment_vertices(&series.data, *seg, stepped, &mut scratch.vertices);

        if let Some(fill) = &style.fill {
            draw_fill(&scratch.vertices, fill, style, view, backend);
        }

        match style.mode {
            LineMode::Linear | LineMode::Stepped => {
                if style.band.enabled {
                    scratch.strokes.clear();
                    scratch.strokes.classify(&scratch.vertices, &style.band);
                    let base = stroke_paint(style, style.color);
                    let alert = stroke_paint(style, style.alert_color);
                    if !scratch.strokes.normal.is_empty() {
                        backend.stroke_segments(&scratch.strokes.normal, &base);
                    }
                    if !scratch.strokes.alert.is_empty() {
                        backend.stroke_segments(&scratch.strokes.alert, &alert);
                    }
                } else {
                    let path = linear_path(&scratch.vertices);
                    backend.stroke_path(&path, &stroke_paint(style, style.color));
                }
            }
            LineMode::Cubic => {
                let path = cubic_path(&scratch.vertices, style.cubic_intensity);
                backend.stroke_path(&path, &stroke_paint(style, style.color));
            }
            LineMode::Horizontal => {
                let path = horizontal_path(&scratch.vertices);
                backend.stroke_path(&path, &stroke_paint(style, style.color));
            }
        }
    }

    draw_gap_hints(series, &segments, backend);
    Ok(())
}

fn stroke_paint(style: &LineStyle, color: Color) -> StrokePaint {
    StrokePaint { color, width: style.width, dash: style.dash.clone() }
}

/// Lone points become a baseline-to-sample vertical line plus a circle,
/// never a polyline or polygon.
fn draw_lone_point(series: &LineSeries, seg: Segment, backend: &mut dyn RenderBackend) {
    let style = &series.style;
    let Some(sample) = series.data.at(seg.start) else {
        return;
    };
    let baseline = style.fill.as_ref().map(FillStyle::baseline_value).unwrap_or(0.0);
    let color = match style.band.classify(sample.y) {
        PointClass::Alert => style.alert_color,
        PointClass::Normal => style.color,
    };
    let point = Point::new(sample.x, sample.y);
    if let FillShape::Marker { line, center } = fill_shape(&[point], baseline) {
        backend.stroke_segments(&[line], &StrokePaint::solid(color, style.width));
        backend.draw_circle(center, style.circle_radius, color);
    }
}

fn draw_fill(
    vertices: &[Point],
    fill: &FillStyle,
    style: &LineStyle,
    view: &ViewState,
    backend: &mut dyn RenderBackend,
) {
    let FillShape::Polygons(polygons) = fill_shape(vertices, fill.baseline_value()) else {
        return;
    };
    let split = fill.split_by_band && style.band.enabled;
    for polygon in &polygons {
        if split {
            // One polygon, composited under the band clip rects; no
            // re-partitioning of the polygon itself.
            let regions = clip_regions(&style.band, view.plot_rect());
            backend.set_clip(Some(regions.between));
            fill_polygon(polygon, fill, style, backend);
            for alert_rect in [regions.above, regions.below].into_iter().flatten() {
                backend.set_clip(Some(alert_rect));
                backend.fill_path(polygon, style.alert_color, fill.alpha);
            }
            backend.set_clip(None);
        } else {
            fill_polygon(polygon, fill, style, backend);
        }
    }
}

fn fill_polygon(
    polygon: &kurbo::BezPath,
    fill: &FillStyle,
    style: &LineStyle,
    backend: &mut dyn RenderBackend,
) {
    match &fill.paint {
        FillPaint::Solid(color) => backend.fill_path(polygon, *color, fill.alpha),
        FillPaint::Gradient(spec) => {
            // Degenerate bounding box: skip the gradient, draw nothing.
            if let Some(mapped) = map_gradient(polygon, style.width, spec) {
                backend.fill_path_gradient(polygon, &mapped, fill.alpha);
            }
        }
    }
}

/// Dashed hints across segment gaps. Hint halves only take the alert color
/// when the band is enabled; otherwise the base color is kept even across
/// a threshold-spanning gap.
fn draw_gap_hints(series: &LineSeries, segments: &[Segment], backend: &mut dyn RenderBackend) {
    let style = &series.style;
    let band = style.band.enabled.then_some(&style.band);
    let dash = style.dash.clone().unwrap_or_else(|| GAP_HINT_DASH.to_vec());
    for hint in gap_dashes(&series.data, segments, band) {
        let color = match hint.class {
            PointClass::Alert => style.alert_color,
            PointClass::Normal => style.color,
        };
        backend.stroke_segments(
            &[[hint.from, hint.to]],
            &StrokePaint::dashed(color, style.width, dash.clone()),
        );
    }
}
