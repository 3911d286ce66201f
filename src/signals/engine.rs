//! Entry decision engine: live entry check and historical entry enumeration.

use crate::config::IndicatorConfig;
use crate::models::{Candle, CrossoverEvent};
use crate::services::{CrossoverSource, OpenPositionQuery};
use crate::signals::error::EntryError;
use crate::signals::verification::{scan_entries, verify_latest, Disqualification, Verdict};
use std::sync::Arc;
use tracing::{debug, info};

/// Stateless between calls; concurrent evaluations share nothing mutable.
#[derive(Clone)]
pub struct EntryEngine {
    config: IndicatorConfig,
    crossovers: Arc<dyn CrossoverSource>,
    positions: Arc<dyn OpenPositionQuery>,
}

impl EntryEngine {
    pub fn new(
        config: IndicatorConfig,
        crossovers: Arc<dyn CrossoverSource>,
        positions: Arc<dyn OpenPositionQuery>,
    ) -> Self {
        Self {
            config,
            crossovers,
            positions,
        }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    /// Should a position be opened on the latest candle of `candles`?
    pub async fn should_enter(&self, candles: &[Candle]) -> Result<bool, EntryError> {
        Ok(self.evaluate_entry(candles).await?.is_entry())
    }

    /// Live entry check with the reason behind a skip.
    ///
    /// The open-position lookup happens before any crossover work; a ticker with an
    /// open position never reaches the crossover source.
    pub async fn evaluate_entry(&self, candles: &[Candle]) -> Result<Verdict, EntryError> {
        let (first, latest) = match (candles.first(), candles.last()) {
            (Some(first), Some(latest)) => (first, latest),
            _ => return Err(EntryError::EmptyCandles),
        };

        if self.positions.has_open_position(&first.ticker) {
            debug!(ticker = %first.ticker, "open position exists, skipping entry check");
            return Ok(Verdict::Skip(Disqualification::OpenPosition {
                ticker: first.ticker.clone(),
            }));
        }

        let crossovers = self
            .crossovers
            .compute_crossovers(candles, &self.config)
            .await?;

        let recent = match crossovers.last() {
            Some(recent) => recent,
            None => return Ok(Verdict::Skip(Disqualification::NoCrossovers)),
        };

        if recent.time != latest.time {
            return Ok(Verdict::Skip(Disqualification::StaleCrossover {
                crossover: recent.time,
                candle: latest.time,
            }));
        }

        let verdict = verify_latest(&crossovers);
        if verdict.is_entry() {
            info!(ticker = %first.ticker, time = %recent.time, "entry signal");
        }
        Ok(verdict)
    }

    /// Every crossover in the window that would have qualified as an entry at the time,
    /// judged only on the crossovers up to and including it.
    pub async fn historical_entry_points(
        &self,
        candles: &[Candle],
    ) -> Result<Vec<CrossoverEvent>, EntryError> {
        let (first, last) = match (candles.first(), candles.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(EntryError::EmptyCandles),
        };

        info!(
            ticker = %first.ticker,
            from = %first.time,
            to = %last.time,
            "calculating historical entry points"
        );

        let crossovers = self
            .crossovers
            .compute_crossovers(candles, &self.config)
            .await?;

        let entries: Vec<CrossoverEvent> = scan_entries(&crossovers).into_iter().cloned().collect();

        info!(
            ticker = %first.ticker,
            crossovers = crossovers.len(),
            entries = entries.len(),
            "found {} historical entry points",
            entries.len()
        );
        for entry in &entries {
            debug!(ticker = %first.ticker, time = %entry.time, "historical entry point");
        }

        Ok(entries)
    }
}
