//! Exponential Moving Average (EMA) indicator
//!
//! ```text
//! EMA_0 = P_0
//! EMA_t = α * P_t + (1 - α) * EMA_{t-1}
//! where α = 2 / (period + 1)
//! ```

use crate::error::{ensure_period, Result};
use crate::traits::Indicator;

/// Exponential Moving Average
///
/// Matches pandas `ewm(span=period, adjust=False).mean()` semantics.
/// Seeded with the first price, so no output position is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EMA {
    /// Number of periods for the EMA
    pub period: usize,
}

impl EMA {
    /// Creates a new EMA indicator with the given period.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Calculates the EMA multiplier (smoothing factor).
    #[must_use]
    pub fn multiplier(&self) -> f64 {
        smoothing_factor(self.period)
    }
}

impl Indicator for EMA {
    type Output = f64;

    fn compute(&self, prices: &[f64]) -> Result<Vec<f64>> {
        ema(prices, self.period)
    }

    fn name(&self) -> &str {
        "EMA"
    }

    fn warmup_periods(&self) -> usize {
        1
    }
}

fn smoothing_factor(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Calculate Exponential Moving Average.
///
/// The recurrence is evaluated as `EMA_{t-1} + α * (P_t - EMA_{t-1})`,
/// which is algebraically the textbook form and keeps a constant input
/// exactly constant.
///
/// # Errors
///
/// Returns [`crate::IndicatorError::InvalidParameter`] if `period` is 0.
pub fn ema(prices: &[f64], period: usize) -> Result<Vec<f64>> {
    ensure_period("EMA", period)?;

    let Some((&first, rest)) = prices.split_first() else {
        return Ok(Vec::new());
    };

    let alpha = smoothing_factor(period);
    let mut result = Vec::with_capacity(prices.len());
    let mut prev = first;
    result.push(prev);

    for &price in rest {
        prev = (price - prev).mul_add(alpha, prev);
        result.push(prev);
    }

    Ok(result)
}
