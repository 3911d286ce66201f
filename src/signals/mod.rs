//! Entry decision interfaces.

pub mod engine;
pub mod error;
pub mod verification;

pub use engine::EntryEngine;
pub use error::EntryError;
pub use verification::{
    is_blacklisted, scan_entries, verify_latest, verify_pair, Disqualification, Verdict,
};
