//! techind demo
//!
//! Synthesizes a random price series, runs every indicator over it and
//! prints the result.
//!
//! Usage: `techind-demo [config.json]` (or set `TECHIND_DEMO_CONFIG`).
//! Log verbosity follows `RUST_LOG`.

mod config;
mod prices;
mod render;

use techind_indicators::{BollingerBands, EMA, Indicator, IndicatorError, RSI, SMA};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{load_config, resolve_config_path, DemoConfig, OutputFormat};
use crate::prices::{random_seed, synthesize_prices};
use crate::render::{render_json, render_text, Report};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = resolve_config_path(std::env::args().nth(1));
    let config = load_config(config_path.as_deref())?;
    match &config_path {
        Some(path) => info!("Loaded demo config from {}", path.display()),
        None => info!("No demo config given, using defaults"),
    }

    let seed = config.rng_seed.unwrap_or_else(random_seed);
    info!(
        seed,
        samples = config.samples,
        "Synthesizing prices around {:.2} ± {:.2}",
        config.base_price,
        config.jitter
    );

    let report = build_report(&config, seed)?;
    let output = match config.output {
        OutputFormat::Text => render_text(&report, config.decimals),
        OutputFormat::Json => render_json(&report)?,
    };
    println!("{output}");

    Ok(())
}

/// Generates the prices and computes every configured indicator.
fn build_report(config: &DemoConfig, seed: u64) -> Result<Report, IndicatorError> {
    let params = &config.indicators;
    let prices = synthesize_prices(config.samples, config.base_price, config.jitter, seed);

    let sma = SMA::new(params.sma_period).compute(&prices)?;
    let ema = EMA::new(params.ema_period).compute(&prices)?;
    let rsi = RSI::new(params.rsi_period).compute(&prices)?;
    let bollinger =
        BollingerBands::new(params.bollinger_period, params.bollinger_std_dev).compute(&prices)?;

    let defined = sma.iter().flatten().count();
    tracing::debug!(defined, total = prices.len(), "SMA positions defined");

    Ok(Report {
        seed,
        indicators: params.clone(),
        prices,
        sma,
        ema,
        rsi,
        bollinger,
    })
}
