// File: crates/pulse-core/src/error.rs
// Summary: Library error type for configuration mistakes surfaced to the caller.

use thiserror::Error;

/// Errors a draw pass surfaces. Data-shaped conditions (too few samples,
/// degenerate numerics) never land here; they degrade to empty geometry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// Gradient fill configured with an empty stop list; inconsistent
    /// styling setup rather than a data condition.
    #[error("gradient fill requested without gradient stops")]
    MissingGradientStops,
}
