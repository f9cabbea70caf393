//! Indicator implementations
//!
//! Contains all concrete indicator implementations.

pub mod bollinger;
pub mod ema;
pub mod rsi;
pub mod sma;
