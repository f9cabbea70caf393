//! Relative Strength Index (RSI) indicator
//!
//! RSI is a momentum oscillator that measures the speed and magnitude
//! of recent price changes.
//!
//! ## Formula
//!
//! ```text
//! RS  = (sum of gains / period) / (sum of losses / period)
//! RSI = 100 - (100 / (1 + RS))
//! ```
//!
//! Gains and losses are plain sums over the trailing `period` deltas
//! (no Wilder smoothing). A window without losses saturates at 100,
//! including a flat window with neither gains nor losses.

use crate::error::Result;
use crate::traits::Indicator;

/// Default RSI lookback.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Relative Strength Index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RSI {
    /// Number of price deltas in the window
    pub period: usize,
}

impl RSI {
    /// Creates a new RSI indicator with the given period.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Default for RSI {
    fn default() -> Self {
        Self::new(DEFAULT_RSI_PERIOD)
    }
}

impl Indicator for RSI {
    type Output = Option<f64>;

    fn compute(&self, prices: &[f64]) -> Result<Vec<Option<f64>>> {
        Ok(rsi(prices, self.period))
    }

    fn name(&self) -> &str {
        "RSI"
    }

    fn warmup_periods(&self) -> usize {
        if self.period == 0 {
            0
        } else {
            self.period + 1
        }
    }
}

/// Running gain/loss sums over the trailing window of deltas.
///
/// The counts track how many rising and falling deltas the window holds.
/// A side with no deltas left has a sum of exactly zero.
#[derive(Debug, Default)]
struct GainLossWindow {
    gains: f64,
    losses: f64,
    rising: usize,
    falling: usize,
}

impl GainLossWindow {
    fn push(&mut self, delta: f64) {
        if delta > 0.0 {
            self.gains += delta;
            self.rising += 1;
        } else if delta < 0.0 {
            self.losses -= delta;
            self.falling += 1;
        }
    }

    fn evict(&mut self, delta: f64) {
        if delta > 0.0 {
            self.rising -= 1;
            self.gains = if self.rising == 0 {
                0.0
            } else {
                (self.gains - delta).max(0.0)
            };
        } else if delta < 0.0 {
            self.falling -= 1;
            self.losses = if self.falling == 0 {
                0.0
            } else {
                (self.losses + delta).max(0.0)
            };
        }
    }

    fn rsi(&self, period_f64: f64) -> f64 {
        let avg_gain = self.gains / period_f64;
        let avg_loss = self.losses / period_f64;
        if avg_loss == 0.0 {
            return 100.0;
        }
        let rs = avg_gain / avg_loss;
        100.0 - 100.0 / (1.0 + rs)
    }
}

/// Calculate Relative Strength Index.
///
/// Index 0 is always `None`. Index `i` is defined once `i >= period`, using
/// the deltas `prices[i - period + 1] - prices[i - period] ..= prices[i] - prices[i - 1]`.
///
/// A zero `period`, or one with `period >= prices.len()`, yields an
/// all-`None` series rather than an error.
#[must_use]
pub fn rsi(prices: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; prices.len()];
    if period == 0 || period >= prices.len() {
        tracing::debug!(
            period,
            len = prices.len(),
            "RSI period leaves no defined positions"
        );
        return result;
    }

    let period_f64 = period as f64;
    let mut window = GainLossWindow::default();

    for i in 1..prices.len() {
        window.push(prices[i] - prices[i - 1]);
        if i >= period {
            result[i] = Some(window.rsi(period_f64));
            window.evict(prices[i - period + 1] - prices[i - period]);
        }
    }

    result
}
