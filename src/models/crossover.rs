use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdCross {
    /// MACD crossover metric at the event.
    pub cross: f64,
}

/// Stochastic oscillator lines, both on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochReading {
    pub k: f64,
    pub d: f64,
}

/// Indicator readings at the bar where a monitored indicator changed direction.
///
/// `time` always matches the `time` of one of the candles the event was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossoverEvent {
    pub time: DateTime<Utc>,
    pub macd: MacdCross,
    pub rsi: f64,
    pub stoch: StochReading,
}

impl CrossoverEvent {
    pub fn new(time: DateTime<Utc>, macd_cross: f64, rsi: f64, stoch_k: f64, stoch_d: f64) -> Self {
        Self {
            time,
            macd: MacdCross { cross: macd_cross },
            rsi,
            stoch: StochReading {
                k: stoch_k,
                d: stoch_d,
            },
        }
    }
}
