//! Indicator error types.

use thiserror::Error;

/// Errors raised when an indicator is called with parameters outside its contract.
///
/// Insufficient history is never an error: positions without enough
/// history are reported as undefined in the output instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// A period or multiplier the indicator cannot work with.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// Human-readable description of the violated constraint.
        reason: String,
    },
}

impl IndicatorError {
    /// Creates an `InvalidParameter` error with a message.
    #[must_use]
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        IndicatorError::InvalidParameter {
            reason: reason.into(),
        }
    }
}

/// Result type alias for indicator computations.
pub type Result<T> = std::result::Result<T, IndicatorError>;

/// Rejects a zero window length.
pub(crate) fn ensure_period(indicator: &str, period: usize) -> Result<()> {
    if period == 0 {
        return Err(IndicatorError::invalid_parameter(format!(
            "{indicator} period must be greater than 0"
        )));
    }
    Ok(())
}
