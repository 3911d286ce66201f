//! Shared data models spanning the engine layers.

pub mod candle;
pub mod crossover;

pub use candle::Candle;
pub use crossover::{CrossoverEvent, MacdCross, StochReading};
