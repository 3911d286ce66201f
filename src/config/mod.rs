//! Indicator period configuration.
//!
//! The periods are opaque to the decision rules: the engine forwards them to the
//! crossover source on every call and never branches on them.

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive integer, got 0")]
    NonPositive { name: &'static str },

    #[error("{name} is not a valid period: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdPeriods {
    pub fast: u32,
    pub slow: u32,
    pub signal: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsiPeriod {
    pub period: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StochPeriods {
    pub k: u32,
    pub slowing: u32,
    pub d: u32,
}

/// Periods for the three indicator families feeding the crossover source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub macd: MacdPeriods,
    pub rsi: RsiPeriod,
    pub stoch: StochPeriods,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            macd: MacdPeriods {
                fast: 12,
                slow: 26,
                signal: 14,
            },
            rsi: RsiPeriod { period: 10 },
            stoch: StochPeriods {
                k: 14,
                slowing: 3,
                d: 3,
            },
        }
    }
}

impl IndicatorConfig {
    /// Defaults overridden by `MACD_FAST`, `MACD_SLOW`, `MACD_SIGNAL`, `RSI_PERIOD`,
    /// `STOCH_K`, `STOCH_SLOWING` and `STOCH_D` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`IndicatorConfig::from_env`] with an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        for (name, slot) in [
            ("MACD_FAST", &mut config.macd.fast),
            ("MACD_SLOW", &mut config.macd.slow),
            ("MACD_SIGNAL", &mut config.macd.signal),
            ("RSI_PERIOD", &mut config.rsi.period),
            ("STOCH_K", &mut config.stoch.k),
            ("STOCH_SLOWING", &mut config.stoch.slowing),
            ("STOCH_D", &mut config.stoch.d),
        ] {
            if let Some(raw) = lookup(name) {
                *slot = raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    name,
                    value: raw.clone(),
                })?;
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let periods = [
            ("MACD_FAST", self.macd.fast),
            ("MACD_SLOW", self.macd.slow),
            ("MACD_SIGNAL", self.macd.signal),
            ("RSI_PERIOD", self.rsi.period),
            ("STOCH_K", self.stoch.k),
            ("STOCH_SLOWING", self.stoch.slowing),
            ("STOCH_D", self.stoch.d),
        ];

        match periods.iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(ConfigError::NonPositive { name: *name }),
            None => Ok(()),
        }
    }
}

/// Deployment environment, read from `ENVIRONMENT` (defaults to `sandbox`).
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}
