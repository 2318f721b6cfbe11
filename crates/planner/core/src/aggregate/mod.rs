//! Roster-wide aggregation and attribution.
//!
//! [`aggregate`] runs every axis calculator over every roster entry, sums the
//! demand per material, records which entity and axis drove it, and compares
//! the totals with owned quantities. Each call rebuilds the whole report from
//! its inputs; nothing is carried over between passes.
mod attribution;

pub use attribution::{Attribution, Contribution, CreditsSummary};

use std::collections::{BTreeMap, BTreeSet};

use crate::env::{CatalogOracle, Env, TablesOracle};
use crate::requirement::{ConsolidatedEntry, consolidate, entity_requirements};
use crate::state::{MaterialId, Roster};

/// Owned versus needed for one material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialBalance {
    pub material: MaterialId,
    pub owned: u64,
    pub needed: u64,
    /// `owned - needed`; negative means a shortage.
    pub remaining: i64,
}

impl MaterialBalance {
    pub fn new(material: MaterialId, owned: u64, needed: u64) -> Self {
        let delta = i128::from(owned) - i128::from(needed);
        let remaining = i64::try_from(delta).unwrap_or(if delta < 0 { i64::MIN } else { i64::MAX });
        Self {
            material,
            owned,
            needed,
            remaining,
        }
    }

    #[inline]
    pub fn is_shortage(&self) -> bool {
        self.remaining < 0
    }
}

/// Result of one aggregation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateReport {
    /// Total demand per material, ascending by id.
    pub consolidated: Vec<ConsolidatedEntry>,
    /// Every material in the catalog or in demand, ascending by id.
    pub summary: Vec<MaterialBalance>,
    /// Materials with `remaining < 0`, largest deficit first.
    pub shortages: Vec<MaterialBalance>,
    pub attribution: Attribution,
    pub credits: CreditsSummary,
}

impl AggregateReport {
    pub fn balance(&self, material: MaterialId) -> Option<&MaterialBalance> {
        self.summary
            .binary_search_by_key(&material, |balance| balance.material)
            .ok()
            .map(|index| &self.summary[index])
    }

    pub fn needed(&self, material: MaterialId) -> u64 {
        self.balance(material).map_or(0, |balance| balance.needed)
    }
}

/// Aggregates demand over the whole roster.
pub fn aggregate<C, T>(env: &Env<'_, C, T>, roster: &Roster) -> AggregateReport
where
    C: CatalogOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    let config = env.config();
    let mut requirements = Vec::new();
    let mut attribution = Attribution::new();
    let mut credits = CreditsSummary::default();

    for entry in roster {
        let entity = entry.id();
        for requirement in entity_requirements(env, entry) {
            if config.is_currency(requirement.material) {
                credits.add(entity, requirement.quantity);
            } else {
                attribution.record(requirement.material, entity, requirement.axis, requirement.quantity);
            }
            requirements.push(requirement);
        }
    }

    let consolidated = consolidate(env, &requirements);
    let demand: BTreeMap<MaterialId, u64> = consolidated
        .iter()
        .map(|entry| (entry.id(), entry.total_quantity))
        .collect();

    let catalog_ids = env
        .catalog()
        .map(|catalog| catalog.material_ids())
        .unwrap_or_default();
    let ids: BTreeSet<MaterialId> = catalog_ids.into_iter().chain(demand.keys().copied()).collect();
    let summary: Vec<MaterialBalance> = ids
        .into_iter()
        .map(|id| {
            let needed = demand.get(&id).copied().unwrap_or(0);
            MaterialBalance::new(id, env.owned_quantity(id), needed)
        })
        .collect();

    let mut shortages: Vec<MaterialBalance> = summary
        .iter()
        .filter(|balance| balance.is_shortage())
        .copied()
        .collect();
    shortages.sort_by_key(|balance| balance.remaining);

    tracing::debug!(
        entities = roster.len(),
        materials = summary.len(),
        shortages = shortages.len(),
        "aggregation pass complete"
    );

    AggregateReport {
        consolidated,
        summary,
        shortages,
        attribution,
        credits,
    }
}
