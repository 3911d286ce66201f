//! Entry-point signal engine.
//!
//! Decides whether the latest crossover produced by an indicator engine is a valid
//! entry, and replays the same decision over history to enumerate past entries.

pub mod config;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use config::{ConfigError, IndicatorConfig};
pub use models::{Candle, CrossoverEvent, MacdCross, StochReading};
pub use signals::{Disqualification, EntryEngine, EntryError, Verdict};
