use super::{RequirementEntry, RequirementKind};
use crate::env::{CatalogOracle, CostTable, Env, TablesOracle};
use crate::state::{Axis, EquipmentCategory, MaterialId, ProgressionRange};

/// Currency needed to raise an equipment piece from tier `current` to `target`.
///
/// From tier 1 the cost is the cumulative table value at `target - 2`; from
/// any other tier it is `table[target - 2] - table[current - 2]`. Missing
/// lookups and negative results are zero.
pub fn credits_needed<T>(tables: &T, current: u32, target: u32) -> u64
where
    T: TablesOracle + ?Sized,
{
    let at_tier = |tier: u32| {
        tier.checked_sub(2)
            .and_then(|index| tables.lookup(CostTable::EquipmentCredits, index as usize))
    };

    let credits = if current == 1 {
        at_tier(target)
    } else {
        at_tier(target).zip(at_tier(current)).and_then(|(t, c)| t.checked_sub(c))
    };
    credits.and_then(|credits| u64::try_from(credits).ok()).unwrap_or(0)
}

/// Equipment axis for one category.
///
/// Walks tiers `current + 1 ..= target`, emitting one `equipment-material`
/// entry per non-currency recipe component, then a single
/// `equipment-credits` entry for the whole range.
pub fn equipment_requirements<C, T>(
    env: &Env<'_, C, T>,
    category: EquipmentCategory,
    range: ProgressionRange,
) -> Vec<RequirementEntry>
where
    C: CatalogOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    let mut entries = Vec::new();
    if !range.is_pending() {
        return entries;
    }

    let config = env.config();
    let axis = Axis::Equipment(category);
    match env.catalog() {
        Ok(catalog) => {
            for level in range.steps() {
                let tier = level + 1;
                let Some(recipe) = catalog.equipment_recipe(category, tier) else {
                    tracing::debug!(%category, tier, "no recipe for equipment tier");
                    continue;
                };
                for component in recipe {
                    if component.raw_id == 0 || component.quantity == 0 {
                        continue;
                    }
                    let Some(material) = MaterialId::from_recipe_raw(component.raw_id) else {
                        continue;
                    };
                    if config.is_currency(material) {
                        continue;
                    }
                    entries.push(RequirementEntry::new(
                        material,
                        component.quantity,
                        RequirementKind::EquipmentMaterial,
                        axis,
                    ));
                }
            }
        }
        Err(error) => tracing::debug!(%error, %category, "skipping equipment materials"),
    }

    match env.tables() {
        Ok(tables) => {
            let credits = credits_needed(tables, range.current, range.target);
            if credits > 0 {
                entries.push(RequirementEntry::new(
                    config.currency_id,
                    credits,
                    RequirementKind::EquipmentCredits,
                    axis,
                ));
            }
        }
        Err(error) => tracing::debug!(%error, %category, "skipping equipment credits"),
    }
    entries
}
