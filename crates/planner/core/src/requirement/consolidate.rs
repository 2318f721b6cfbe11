use std::collections::BTreeMap;

use super::RequirementEntry;
use crate::env::{CatalogOracle, Env, MaterialRecord, TablesOracle};
use crate::state::MaterialId;

/// Total demand for one material.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsolidatedEntry {
    /// Catalog record, or a placeholder when the catalog does not know the id.
    pub material: MaterialRecord,
    pub total_quantity: u64,
}

impl ConsolidatedEntry {
    #[inline]
    pub fn id(&self) -> MaterialId {
        self.material.id
    }
}

/// Sums quantities per material id.
fn totals<'e>(
    entries: impl IntoIterator<Item = &'e RequirementEntry>,
) -> BTreeMap<MaterialId, u64> {
    let mut totals = BTreeMap::new();
    for entry in entries {
        let total: &mut u64 = totals.entry(entry.material).or_default();
        *total = total.saturating_add(entry.quantity);
    }
    totals
}

/// Merges entries into one [`ConsolidatedEntry`] per material, ascending by id.
pub fn consolidate<C, T>(env: &Env<'_, C, T>, entries: &[RequirementEntry]) -> Vec<ConsolidatedEntry>
where
    C: CatalogOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    totals(entries)
        .into_iter()
        .map(|(id, total_quantity)| ConsolidatedEntry {
            material: env.resolve_material(id),
            total_quantity,
        })
        .collect()
}
