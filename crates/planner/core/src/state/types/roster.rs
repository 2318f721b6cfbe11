use std::collections::BTreeMap;
use std::collections::btree_map;

use super::{EntityId, EntityProfile, EntityProgress};

/// One planned entity: its static profile plus its progression state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterEntry {
    pub profile: EntityProfile,
    #[cfg_attr(feature = "serde", serde(default))]
    pub progress: EntityProgress,
}

impl RosterEntry {
    pub fn new(profile: EntityProfile, progress: EntityProgress) -> Self {
        Self { profile, progress }
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.profile.id
    }
}

/// All planned entities, keyed and iterated by ascending [`EntityId`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    entries: BTreeMap<EntityId, RosterEntry>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry, returning the previous one.
    pub fn upsert(&mut self, entry: RosterEntry) -> Option<RosterEntry> {
        self.entries.insert(entry.id(), entry)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<RosterEntry> {
        self.entries.remove(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&RosterEntry> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut RosterEntry> {
        self.entries.get_mut(&id)
    }

    pub fn iter(&self) -> btree_map::Values<'_, EntityId, RosterEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<RosterEntry> for Roster {
    fn from_iter<I: IntoIterator<Item = RosterEntry>>(iter: I) -> Self {
        let mut roster = Self::new();
        for entry in iter {
            roster.upsert(entry);
        }
        roster
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a RosterEntry;
    type IntoIter = btree_map::Values<'a, EntityId, RosterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
