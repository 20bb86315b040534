// File: crates/pulse-core/src/lib.rs
// Summary: Core library entry point; exports the line chart geometry engine API.

pub mod chart;
pub mod curve;
pub mod error;
pub mod fill;
pub mod geometry;
pub mod gradient;
pub mod render;
pub mod sample;
pub mod segment;
pub mod style;
pub mod threshold;
pub mod view;

pub use chart::{LineChart, LineSeries};
pub use error::ChartError;
pub use gradient::{GradientSpec, MappedGradient};
pub use render::{RenderBackend, StrokePaint};
pub use sample::{Sample, SampleSource, VecSampleSource};
pub use segment::{ClassifiedStrokes, GapDash, Segment};
pub use style::{FillPaint, FillStyle, LineMode, LineStyle};
pub use threshold::{PointClass, ThresholdBand};
pub use view::ViewState;
