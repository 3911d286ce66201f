//! Open-position lookup used to suppress duplicate entries.

use std::collections::HashSet;
use std::sync::RwLock;

pub trait OpenPositionQuery: Send + Sync {
    fn has_open_position(&self, ticker: &str) -> bool;
}

/// In-memory record of tickers that currently hold a position.
#[derive(Debug, Default)]
pub struct OpenPositionBook {
    tickers: RwLock<HashSet<String>>,
}

impl OpenPositionBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the ticker already had an open position.
    pub fn open(&self, ticker: impl Into<String>) -> bool {
        let mut tickers = self.tickers.write().unwrap_or_else(|e| e.into_inner());
        tickers.insert(ticker.into())
    }

    /// Returns `false` if the ticker had no open position.
    pub fn close(&self, ticker: &str) -> bool {
        let mut tickers = self.tickers.write().unwrap_or_else(|e| e.into_inner());
        tickers.remove(ticker)
    }

    pub fn open_tickers(&self) -> Vec<String> {
        let tickers = self.tickers.read().unwrap_or_else(|e| e.into_inner());
        let mut open: Vec<String> = tickers.iter().cloned().collect();
        open.sort();
        open
    }
}

impl OpenPositionQuery for OpenPositionBook {
    fn has_open_position(&self, ticker: &str) -> bool {
        self.tickers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains(ticker)
    }
}

/// Position query for callers that do not track positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpenPositions;

impl OpenPositionQuery for NoOpenPositions {
    fn has_open_position(&self, _ticker: &str) -> bool {
        false
    }
}
