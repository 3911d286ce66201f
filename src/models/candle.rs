use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One bar of price history for a single instrument.
///
/// The OHLC fields are only read by the crossover source; the engine looks at
/// `ticker` and `time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub ticker: String,
    pub time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: f64,
}

impl Candle {
    pub fn new(
        ticker: impl Into<String>,
        time: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}
