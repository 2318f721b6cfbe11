//! Repository contracts for saving and loading the roster.

use planner_core::Roster;

use super::Result;

/// Repository for the user's roster (profiles plus progression state).
///
/// A failed `load` is not fatal: the runtime logs it and starts from an
/// empty roster.
pub trait RosterRepository: Send + Sync {
    fn load(&self) -> Result<Roster>;

    fn save(&self, roster: &Roster) -> Result<()>;
}
