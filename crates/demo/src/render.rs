//! Report rendering.
//!
//! Undefined positions print as `None` in text mode and `null` in JSON mode.
//! A computed `0.0` is always printed as a number.

use serde::Serialize;
use techind_indicators::BandRecord;

use crate::config::IndicatorConfig;

/// All series produced by one demo run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Seed the prices were drawn with
    pub seed: u64,
    /// Parameters the series were computed with
    pub indicators: IndicatorConfig,
    /// Input prices
    pub prices: Vec<f64>,
    /// SMA series
    pub sma: Vec<Option<f64>>,
    /// EMA series
    pub ema: Vec<f64>,
    /// RSI series
    pub rsi: Vec<Option<f64>>,
    /// Bollinger band records
    pub bollinger: Vec<BandRecord>,
}

fn format_value(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => "None".to_string(),
    }
}

fn format_series<I>(values: I, decimals: usize) -> String
where
    I: IntoIterator<Item = Option<f64>>,
{
    let items: Vec<String> = values
        .into_iter()
        .map(|v| format_value(v, decimals))
        .collect();
    format!("[{}]", items.join(", "))
}

fn format_band(record: &BandRecord, decimals: usize) -> String {
    format!(
        "{{upper: {}, middle: {}, lower: {}}}",
        format_value(record.upper, decimals),
        format_value(record.middle, decimals),
        format_value(record.lower, decimals)
    )
}

/// Renders the report as rounded text lines.
#[must_use]
pub fn render_text(report: &Report, decimals: usize) -> String {
    let params = &report.indicators;
    let mut lines = vec![
        format!(
            "Prices: {}",
            format_series(report.prices.iter().copied().map(Some), decimals)
        ),
        format!(
            "SMA({}): {}",
            params.sma_period,
            format_series(report.sma.iter().copied(), decimals)
        ),
        format!(
            "EMA({}): {}",
            params.ema_period,
            format_series(report.ema.iter().copied().map(Some), decimals)
        ),
        format!(
            "RSI({}): {}",
            params.rsi_period,
            format_series(report.rsi.iter().copied(), decimals)
        ),
        format!("Bollinger Bands({}):", params.bollinger_period),
    ];
    lines.extend(report.bollinger.iter().map(|b| format_band(b, decimals)));
    lines.join("\n")
}

/// Renders the report as pretty JSON.
///
/// # Errors
/// Returns the serializer error; non-finite prices cannot be represented.
pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> Report {
        Report {
            seed: 7,
            indicators: IndicatorConfig {
                sma_period: 2,
                ema_period: 2,
                rsi_period: 1,
                bollinger_period: 2,
                bollinger_std_dev: 2.0,
            },
            prices: vec![100.004, 99.5],
            sma: vec![None, Some(99.752)],
            ema: vec![100.004, 99.668],
            rsi: vec![None, Some(0.0)],
            bollinger: vec![BandRecord::UNDEFINED, BandRecord::new(100.256, 99.752, 99.248)],
        }
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample_report(), 2);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Prices: [100.00, 99.50]",
                "SMA(2): [None, 99.75]",
                "EMA(2): [100.00, 99.67]",
                "RSI(1): [None, 0.00]",
                "Bollinger Bands(2):",
                "{upper: None, middle: None, lower: None}",
                "{upper: 100.26, middle: 99.75, lower: 99.25}",
            ]
        );
    }

    #[test]
    fn test_render_json_uses_null() {
        let json = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["seed"], 7);
        assert!(value["sma"][0].is_null());
        assert_eq!(value["rsi"][1], 0.0);
        assert!(value["bollinger"][0]["upper"].is_null());
        assert_eq!(value["indicators"]["rsi_period"], 1);
    }
}
