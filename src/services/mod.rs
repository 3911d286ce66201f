//! Collaborators the engine consults: the crossover source and open-position state.

pub mod crossovers;
pub mod positions;

pub use crossovers::{CrossoverSource, ReplayCrossoverSource};
pub use positions::{NoOpenPositions, OpenPositionBook, OpenPositionQuery};
