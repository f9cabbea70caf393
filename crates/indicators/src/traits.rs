//! Indicator trait.
//!
//! Every indicator is a plain parameter struct that computes over a full
//! price slice and returns one output element per input price.

use crate::error::Result;

/// Trait implemented by every indicator.
///
/// `compute` returns a `Vec` with the same length as `prices`. Output
/// index `i` only depends on `prices[..=i]`.
pub trait Indicator: Send + Sync {
    /// Element type of the output series (`Option<f64>`, `f64`, or a record).
    type Output;

    /// Computes the indicator for all prices.
    ///
    /// # Errors
    ///
    /// Returns [`crate::IndicatorError::InvalidParameter`] when the
    /// indicator's parameters violate its contract.
    fn compute(&self, prices: &[f64]) -> Result<Vec<Self::Output>>;

    /// Name of the indicator (e.g., "SMA", "RSI").
    fn name(&self) -> &str;

    /// Number of prices required before the first defined output.
    ///
    /// Zero means no output position is ever defined.
    fn warmup_periods(&self) -> usize;
}
