use thiserror::Error;

/// Failures the engine hands back to its caller unchanged.
///
/// A crossover that fails the entry rules is not an error; see
/// [`Disqualification`](crate::signals::Disqualification).
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("candle sequence is empty")]
    EmptyCandles,

    #[error("crossover source failed: {0}")]
    CrossoverSource(String),
}
