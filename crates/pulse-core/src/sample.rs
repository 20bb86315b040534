// File: crates/pulse-core/src/sample.rs
// Summary: Sample model and the read-only source capability the engine draws from.

/// One data point of a series. `x` values within a series are
/// non-decreasing (ties allowed).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    /// Opaque icon id; attaching imagery is renderer business.
    pub icon: Option<u64>,
}

impl Sample {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, icon: None }
    }

    pub const fn with_icon(x: f64, y: f64, icon: u64) -> Self {
        Self { x, y, icon: Some(icon) }
    }
}

/// Read accessors the geometry engine needs from a series. Any concrete
/// storage can implement this; the engine never mutates a source.
pub trait SampleSource {
    fn count(&self) -> usize;

    /// Sample at `index`, or `None` beyond range.
    fn at(&self, index: usize) -> Option<Sample>;

    /// Inclusive index window of samples with x in `[x_min, x_max]`,
    /// or `None` when nothing is visible.
    fn visible_window(&self, x_min: f64, x_max: f64) -> Option<(usize, usize)>;
}

/// Vec-backed source; relies on the non-decreasing x invariant for the
/// binary-searched window query.
#[derive(Clone, Debug, Default)]
pub struct VecSampleSource {
    samples: Vec<Sample>,
}

impl VecSampleSource {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn from_xy(data: &[(f64, f64)]) -> Self {
        Self { samples: data.iter().map(|&(x, y)| Sample::new(x, y)).collect() }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }
}

impl SampleSource for VecSampleSource {
    fn count(&self) -> usize {
        self.samples.len()
    }

    fn at(&self, index: usize) -> Option<Sample> {
        self.samples.get(index).copied()
    }

    fn visible_window(&self, x_min: f64, x_max: f64) -> Option<(usize, usize)> {
        if self.samples.is_empty() || x_min > x_max {
            return None;
        }
        let lo = self.samples.partition_point(|s| s.x < x_min);
        let hi = self.samples.partition_point(|s| s.x <= x_max);
        if lo >= hi {
            return None;
        }
        Some((lo, hi - 1))
    }
}
