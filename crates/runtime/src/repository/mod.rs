//! Roster persistence adapters.
//!
//! The worker owns the live roster; repositories only see whole-roster saves
//! after each accepted edit and a single load at startup.
mod error;
mod roster;
mod traits;

pub use error::{RepositoryError, Result};
pub use roster::InMemoryRosterRepo;
pub use traits::RosterRepository;
