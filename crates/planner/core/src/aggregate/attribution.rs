use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::state::{Axis, EntityId, MaterialId};

/// Share of one material's demand driven by one entity on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Contribution {
    pub entity: EntityId,
    pub quantity: u64,
    pub axis: Axis,
}

/// Which entities (and axes) drive the demand for each non-currency material.
///
/// Rows keep first-seen order; a repeated `(entity, axis)` pair adds to its
/// existing row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Attribution {
    rows: BTreeMap<MaterialId, Vec<Contribution>>,
}

impl Attribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, material: MaterialId, entity: EntityId, axis: Axis, quantity: u64) {
        let rows = self.rows.entry(material).or_default();
        match rows
            .iter_mut()
            .find(|row| row.entity == entity && row.axis == axis)
        {
            Some(row) => row.quantity = row.quantity.saturating_add(quantity),
            None => rows.push(Contribution {
                entity,
                quantity,
                axis,
            }),
        }
    }

    /// Contributions to `material`, empty when nothing demands it.
    pub fn usage_for(&self, material: MaterialId) -> &[Contribution] {
        self.rows.get(&material).map_or(&[], Vec::as_slice)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, MaterialId, Vec<Contribution>> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Roster-wide currency demand, merged per entity across all axes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditsSummary {
    pub total: u64,
    pub per_entity: BTreeMap<EntityId, u64>,
}

impl CreditsSummary {
    pub fn add(&mut self, entity: EntityId, quantity: u64) {
        self.total = self.total.saturating_add(quantity);
        let entry = self.per_entity.entry(entity).or_default();
        *entry = entry.saturating_add(quantity);
    }

    pub fn for_entity(&self, entity: EntityId) -> u64 {
        self.per_entity.get(&entity).copied().unwrap_or(0)
    }
}
