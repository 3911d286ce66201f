//! Crossover-pair verification.
//!
//! The final crossover of a sequence is an entry when, compared with the one before it,
//! it passes the MACD, RSI and stochastic checks in that order. The first failing
//! check decides the verdict and the remaining checks are skipped.

use crate::models::{CrossoverEvent, StochReading};
use chrono::{DateTime, Utc};
use std::fmt;
use std::ops::RangeInclusive;
use tracing::debug;

pub const RSI_BULLISH_THRESHOLD: f64 = 50.0;

/// Overbought-exhaustion zones, `(k band, d band)`, both bounds inclusive.
pub const STOCH_BLACKLIST: [(RangeInclusive<f64>, RangeInclusive<f64>); 3] = [
    (90.0..=99.0, 90.0..=99.0),
    (80.0..=89.0, 80.0..=89.0),
    (80.0..=84.0, 70.0..=79.0),
];

/// Why a crossover (or a live check) did not produce an entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Disqualification {
    NoPreviousCrossover,
    MacdNotRising { previous: f64, current: f64 },
    RsiNotRising { previous: f64, current: f64 },
    RsiNotBullish { current: f64 },
    StochNotBullish { k: f64, d: f64 },
    StochBlacklisted { k: f64, d: f64 },
    OpenPosition { ticker: String },
    NoCrossovers,
    StaleCrossover {
        crossover: DateTime<Utc>,
        candle: DateTime<Utc>,
    },
}

impl fmt::Display for Disqualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPreviousCrossover => write!(f, "no previous crossover to compare against"),
            Self::MacdNotRising { previous, current } => write!(
                f,
                "MACD crossover wasn't higher than previous crossover, {} -> {}",
                previous, current
            ),
            Self::RsiNotRising { previous, current } => write!(
                f,
                "RSI wasn't higher than the previous crossover, {} -> {}",
                previous, current
            ),
            Self::RsiNotBullish { current } => write!(
                f,
                "RSI wasn't above {}, {}",
                RSI_BULLISH_THRESHOLD, current
            ),
            Self::StochNotBullish { k, d } => write!(f, "STOCH wasn't favorable, k:{} d:{}", k, d),
            Self::StochBlacklisted { k, d } => {
                write!(f, "STOCH falls within blacklisted ranges, k:{} d:{}", k, d)
            }
            Self::OpenPosition { ticker } => {
                write!(f, "an entry position already exists for {}", ticker)
            }
            Self::NoCrossovers => write!(f, "no crossovers in the candle window"),
            Self::StaleCrossover { crossover, candle } => write!(
                f,
                "latest crossover at {} is not on the latest candle at {}",
                crossover, candle
            ),
        }
    }
}

/// Outcome of an entry decision.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Entry,
    Skip(Disqualification),
}

impl Verdict {
    pub fn is_entry(&self) -> bool {
        matches!(self, Verdict::Entry)
    }

    pub fn disqualification(&self) -> Option<&Disqualification> {
        match self {
            Verdict::Entry => None,
            Verdict::Skip(reason) => Some(reason),
        }
    }
}

impl From<Result<(), Disqualification>> for Verdict {
    fn from(result: Result<(), Disqualification>) -> Self {
        match result {
            Ok(()) => Verdict::Entry,
            Err(reason) => Verdict::Skip(reason),
        }
    }
}

/// Judge the last crossover of `crossovers` against the one before it.
///
/// Sequences shorter than two are skipped with [`Disqualification::NoPreviousCrossover`].
pub fn verify_latest(crossovers: &[CrossoverEvent]) -> Verdict {
    match crossovers {
        [.., previous, current] => verify_pair(previous, current),
        _ => {
            debug!("no previous crossover found to compare against");
            Verdict::Skip(Disqualification::NoPreviousCrossover)
        }
    }
}

pub fn verify_pair(previous: &CrossoverEvent, current: &CrossoverEvent) -> Verdict {
    let verdict = Verdict::from(check_pair(previous, current));
    if let Verdict::Skip(reason) = &verdict {
        debug!(time = %current.time, %reason, "crossover disqualified");
    }
    verdict
}

fn check_pair(previous: &CrossoverEvent, current: &CrossoverEvent) -> Result<(), Disqualification> {
    check_macd(previous, current)?;
    check_rsi(previous, current)?;
    check_stoch(&current.stoch)
}

fn check_macd(previous: &CrossoverEvent, current: &CrossoverEvent) -> Result<(), Disqualification> {
    // Negated comparisons so NaN readings fail the rule.
    if !(current.macd.cross > previous.macd.cross) {
        return Err(Disqualification::MacdNotRising {
            previous: previous.macd.cross,
            current: current.macd.cross,
        });
    }
    Ok(())
}

fn check_rsi(previous: &CrossoverEvent, current: &CrossoverEvent) -> Result<(), Disqualification> {
    if !(current.rsi > previous.rsi) {
        return Err(Disqualification::RsiNotRising {
            previous: previous.rsi,
            current: current.rsi,
        });
    }
    if !(current.rsi > RSI_BULLISH_THRESHOLD) {
        return Err(Disqualification::RsiNotBullish {
            current: current.rsi,
        });
    }
    Ok(())
}

fn check_stoch(stoch: &StochReading) -> Result<(), Disqualification> {
    let StochReading { k, d } = *stoch;

    if !(k > d) {
        return Err(Disqualification::StochNotBullish { k, d });
    }
    if is_blacklisted(stoch) {
        return Err(Disqualification::StochBlacklisted { k, d });
    }
    Ok(())
}

pub fn is_blacklisted(stoch: &StochReading) -> bool {
    STOCH_BLACKLIST
        .iter()
        .any(|(k_band, d_band)| k_band.contains(&stoch.k) && d_band.contains(&stoch.d))
}

/// Single forward pass over `crossovers`, keeping every crossover that would have been
/// an entry had it been the latest one known.
///
/// Equivalent to calling [`verify_latest`] on every prefix, without the quadratic cost.
pub fn scan_entries(crossovers: &[CrossoverEvent]) -> Vec<&CrossoverEvent> {
    crossovers
        .windows(2)
        .filter(|pair| verify_pair(&pair[0], &pair[1]).is_entry())
        .map(|pair| &pair[1])
        .collect()
}
