//! In-memory RosterRepository implementation for tests and local runs.

use std::sync::RwLock;

use planner_core::Roster;

use super::{RepositoryError, Result, RosterRepository};

#[derive(Debug, Default)]
pub struct InMemoryRosterRepo {
    roster: RwLock<Roster>,
}

impl InMemoryRosterRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster: RwLock::new(roster),
        }
    }
}

impl RosterRepository for InMemoryRosterRepo {
    fn load(&self) -> Result<Roster> {
        let roster = self
            .roster
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(roster.clone())
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        let mut stored = self
            .roster
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        stored.clone_from(roster);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::{EntityId, EntityProfile, EntityProgress, RosterEntry};

    #[test]
    fn save_replaces_stored_roster() {
        let repo = InMemoryRosterRepo::new();
        assert!(repo.load().unwrap().is_empty());

        let roster: Roster = [RosterEntry::new(
            EntityProfile::new(EntityId(7), "Mika"),
            EntityProgress::default(),
        )]
        .into_iter()
        .collect();
        repo.save(&roster).unwrap();

        assert_eq!(repo.load().unwrap(), roster);
        repo.save(&Roster::new()).unwrap();
        assert!(repo.load().unwrap().is_empty());
    }
}
