//! Output value types shared by the indicators.

use serde::{Deserialize, Serialize};

/// One Bollinger Bands record, aligned with a single input price.
///
/// All three fields are `None` while the window has not filled yet.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BandRecord {
    /// Upper band = middle + `std_dev` * std
    pub upper: Option<f64>,
    /// Middle band = rolling mean
    pub middle: Option<f64>,
    /// Lower band = middle - `std_dev` * std
    pub lower: Option<f64>,
}

impl BandRecord {
    /// Record for a position without enough history.
    pub const UNDEFINED: Self = Self {
        upper: None,
        middle: None,
        lower: None,
    };

    /// Creates a fully defined record.
    #[must_use]
    pub fn new(upper: f64, middle: f64, lower: f64) -> Self {
        Self {
            upper: Some(upper),
            middle: Some(middle),
            lower: Some(lower),
        }
    }

    /// Returns true when the record carries values.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.middle.is_some()
    }

    /// Distance between the upper and lower band.
    ///
    /// Negative when the bands were computed with a negative `std_dev`.
    #[must_use]
    pub fn width(&self) -> Option<f64> {
        Some(self.upper? - self.lower?)
    }
}

/// Column-oriented view of a band record series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BandColumns {
    /// Upper band per index
    pub upper: Vec<Option<f64>>,
    /// Middle band per index
    pub middle: Vec<Option<f64>>,
    /// Lower band per index
    pub lower: Vec<Option<f64>>,
}

impl BandColumns {
    /// Number of aligned positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    /// Returns true when no positions are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }
}

impl From<&[BandRecord]> for BandColumns {
    fn from(records: &[BandRecord]) -> Self {
        let mut columns = BandColumns {
            upper: Vec::with_capacity(records.len()),
            middle: Vec::with_capacity(records.len()),
            lower: Vec::with_capacity(records.len()),
        };
        for record in records {
            columns.upper.push(record.upper);
            columns.middle.push(record.middle);
            columns.lower.push(record.lower);
        }
        columns
    }
}
