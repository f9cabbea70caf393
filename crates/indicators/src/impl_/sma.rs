//! Simple Moving Average (SMA) indicator
//!
//! ```text
//! SMA_t = (P_t + P_{t-1} + ... + P_{t-n+1}) / n
//! ```

use crate::error::{ensure_period, Result};
use crate::stats::window_mean;
use crate::traits::Indicator;

/// Simple Moving Average
///
/// Arithmetic mean of the last `period` prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SMA {
    /// Number of periods for the moving average
    pub period: usize,
}

impl SMA {
    /// Creates a new SMA indicator with the given period.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for SMA {
    type Output = Option<f64>;

    fn compute(&self, prices: &[f64]) -> Result<Vec<Option<f64>>> {
        sma(prices, self.period)
    }

    fn name(&self) -> &str {
        "SMA"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }
}

/// Calculate Simple Moving Average.
///
/// Positions `0..period - 1` are `None`. Each defined position averages its
/// own window relative to the window's first price, so `period = 1` and
/// windows of identical prices reproduce the input exactly.
///
/// # Errors
///
/// Returns [`crate::IndicatorError::InvalidParameter`] if `period` is 0.
pub fn sma(prices: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    ensure_period("SMA", period)?;

    let mut result = vec![None; prices.len()];
    if prices.len() < period {
        tracing::debug!(
            period,
            len = prices.len(),
            "SMA period exceeds available prices"
        );
        return Ok(result);
    }

    for (offset, window) in prices.windows(period).enumerate() {
        result[offset + period - 1] = Some(window_mean(window));
    }

    Ok(result)
}
