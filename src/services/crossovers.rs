//! Crossover source interface and a replay implementation over precomputed events.

use crate::config::IndicatorConfig;
use crate::models::{Candle, CrossoverEvent};
use crate::signals::EntryError;
use async_trait::async_trait;

/// Turns a candle window into the ascending sequence of crossovers inside it.
#[async_trait]
pub trait CrossoverSource: Send + Sync {
    /// Fails on an empty or malformed candle window. An empty `Ok` means no crossovers.
    async fn compute_crossovers(
        &self,
        candles: &[Candle],
        config: &IndicatorConfig,
    ) -> Result<Vec<CrossoverEvent>, EntryError>;
}

/// Serves crossovers exported ahead of time by an indicator engine.
///
/// Each call returns the stored events whose time falls inside the candle window.
/// The configuration is not consulted: the events were computed with whatever periods
/// the exporter used.
#[derive(Debug, Clone, Default)]
pub struct ReplayCrossoverSource {
    crossovers: Vec<CrossoverEvent>,
}

impl ReplayCrossoverSource {
    pub fn new(mut crossovers: Vec<CrossoverEvent>) -> Self {
        crossovers.sort_by_key(|crossover| crossover.time);
        Self { crossovers }
    }

    pub fn from_json(json: &str) -> Result<Self, EntryError> {
        let crossovers: Vec<CrossoverEvent> = serde_json::from_str(json)
            .map_err(|e| EntryError::CrossoverSource(format!("invalid crossover data: {}", e)))?;
        Ok(Self::new(crossovers))
    }

    pub fn len(&self) -> usize {
        self.crossovers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crossovers.is_empty()
    }
}

#[async_trait]
impl CrossoverSource for ReplayCrossoverSource {
    async fn compute_crossovers(
        &self,
        candles: &[Candle],
        _config: &IndicatorConfig,
    ) -> Result<Vec<CrossoverEvent>, EntryError> {
        let (first, last) = match (candles.first(), candles.last()) {
            (Some(first), Some(last)) => (first.time, last.time),
            _ => return Err(EntryError::EmptyCandles),
        };

        if first > last {
            return Err(EntryError::CrossoverSource(format!(
                "candles are not in ascending time order: {} > {}",
                first, last
            )));
        }

        Ok(self
            .crossovers
            .iter()
            .filter(|crossover| crossover.time >= first && crossover.time <= last)
            .cloned()
            .collect())
    }
}
