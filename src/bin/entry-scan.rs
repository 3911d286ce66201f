//! Entry Scan
//!
//! Replays exported crossovers over a candle history and reports the historical
//! entry points plus the live decision for the latest candle.
//!
//! Reads `CANDLES_PATH` and `CROSSOVERS_PATH` (JSON arrays) from the environment.

use dotenvy::dotenv;
use entry_signal::config::{get_environment, IndicatorConfig};
use entry_signal::logging;
use entry_signal::models::Candle;
use entry_signal::services::{OpenPositionBook, ReplayCrossoverSource};
use entry_signal::signals::{EntryEngine, Verdict};
use std::env;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    logging::init_logging();

    let environment = get_environment();
    info!(environment = %environment, "Starting entry scan");

    let candles_path = env::var("CANDLES_PATH").map_err(|_| "CANDLES_PATH must be set")?;
    let crossovers_path = env::var("CROSSOVERS_PATH").map_err(|_| "CROSSOVERS_PATH must be set")?;

    let config = IndicatorConfig::from_env()?;
    info!(?config, "Indicator configuration");

    let candles: Vec<Candle> = serde_json::from_str(&std::fs::read_to_string(&candles_path)?)?;
    let source = ReplayCrossoverSource::from_json(&std::fs::read_to_string(&crossovers_path)?)?;
    info!(
        candles = candles.len(),
        crossovers = source.len(),
        "Loaded {} candles and {} crossovers",
        candles.len(),
        source.len()
    );

    let engine = EntryEngine::new(config, Arc::new(source), Arc::new(OpenPositionBook::new()));

    let entries = engine.historical_entry_points(&candles).await?;
    for entry in &entries {
        info!(
            time = %entry.time,
            macd_cross = entry.macd.cross,
            rsi = entry.rsi,
            stoch_k = entry.stoch.k,
            stoch_d = entry.stoch.d,
            "Historical entry point"
        );
    }

    match engine.evaluate_entry(&candles).await? {
        Verdict::Entry => info!("Latest candle is an entry point"),
        Verdict::Skip(reason) => info!(%reason, "Latest candle is not an entry point"),
    }

    Ok(())
}
