//! techind Indicators
//!
//! Classical technical-analysis indicators over a finite price series.
//! Every indicator is a pure function of the input slice: no state survives
//! between calls, and the output always has the same length as the input.
//!
//! # Available Indicators
//! - SMA: Simple Moving Average
//! - EMA: Exponential Moving Average
//! - RSI: Relative Strength Index (rolling gain/loss sums)
//! - Bollinger Bands: Upper, Middle, Lower bands
//!
//! # Undefined positions
//! Positions without enough history are `None` (or
//! [`BandRecord::UNDEFINED`]), never `0.0` or NaN.
//!
//! ```
//! use techind_indicators::sma;
//!
//! let values = sma(&[10.0, 11.0, 12.0, 11.0, 10.0], 3).unwrap();
//! assert_eq!(values[..3], [None, None, Some(11.0)]);
//! ```

pub mod error;
pub mod impl_;
pub mod series;
mod stats;
pub mod traits;

// Re-export main types
pub use error::{IndicatorError, Result};
pub use series::{BandColumns, BandRecord};
pub use traits::Indicator;

// Re-export indicator implementations
pub use impl_::{
    bollinger::{
        bollinger, BollingerBands, DEFAULT_BOLLINGER_PERIOD, DEFAULT_BOLLINGER_STD_DEV,
    },
    ema::{ema, EMA},
    rsi::{rsi, RSI, DEFAULT_RSI_PERIOD},
    sma::{sma, SMA},
};
