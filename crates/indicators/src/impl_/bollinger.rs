//! Bollinger Bands indicator

use crate::error::{ensure_period, IndicatorError, Result};
use crate::series::BandRecord;
use crate::stats::{population_variance, window_mean};
use crate::traits::Indicator;

/// Default Bollinger window.
pub const DEFAULT_BOLLINGER_PERIOD: usize = 20;

/// Default standard deviation multiplier.
pub const DEFAULT_BOLLINGER_STD_DEV: f64 = 2.0;

/// Bollinger Bands
///
/// Calculates three bands based on standard deviation around a simple moving average:
/// - Upper Band = SMA + (std_dev * StdDev)
/// - Middle Band = SMA
/// - Lower Band = SMA - (std_dev * StdDev)
///
/// Uses population standard deviation (n), not sample (n-1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerBands {
    /// Period for the SMA and standard deviation
    pub period: usize,
    /// Multiplier for standard deviation (typically 2.0)
    pub std_dev: f64,
}

impl BollingerBands {
    /// Creates new Bollinger Bands with the given parameters.
    #[must_use]
    pub fn new(period: usize, std_dev: f64) -> Self {
        Self { period, std_dev }
    }
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self::new(DEFAULT_BOLLINGER_PERIOD, DEFAULT_BOLLINGER_STD_DEV)
    }
}

impl Indicator for BollingerBands {
    type Output = BandRecord;

    fn compute(&self, prices: &[f64]) -> Result<Vec<BandRecord>> {
        bollinger(prices, self.period, self.std_dev)
    }

    fn name(&self) -> &str {
        "BOLLINGER"
    }

    fn warmup_periods(&self) -> usize {
        self.period
    }
}

/// Calculate Bollinger Bands.
///
/// Positions `0..period - 1` are [`BandRecord::UNDEFINED`]. A zero or
/// negative `std_dev` is accepted: zero collapses the bands onto the mean
/// and a negative value swaps upper and lower.
///
/// # Errors
///
/// Returns [`IndicatorError::InvalidParameter`] if:
/// - `period` is 0
/// - `std_dev` is NaN or infinite
pub fn bollinger(prices: &[f64], period: usize, std_dev: f64) -> Result<Vec<BandRecord>> {
    ensure_period("Bollinger", period)?;
    if !std_dev.is_finite() {
        return Err(IndicatorError::invalid_parameter(format!(
            "Bollinger std_dev must be finite, got {std_dev}"
        )));
    }

    let mut result = vec![BandRecord::UNDEFINED; prices.len()];
    if prices.len() < period {
        tracing::debug!(
            period,
            len = prices.len(),
            "Bollinger period exceeds available prices"
        );
        return Ok(result);
    }

    for (offset, window) in prices.windows(period).enumerate() {
        let mean = window_mean(window);
        let band_width = std_dev * population_variance(window, mean).sqrt();

        result[offset + period - 1] = BandRecord::new(mean + band_width, mean, mean - band_width);
    }

    Ok(result)
}
