use super::{RequirementEntry, RequirementKind};
use crate::config::PlannerConfig;
use crate::env::{CatalogOracle, Env, TablesOracle};
use crate::state::{Axis, EntityProfile, MaterialId, PotentialType, ProgressionRange};

const BLOCK: u32 = PlannerConfig::POTENTIAL_BLOCK_SIZE;

/// Number of levels of `block` that fall inside `range`.
///
/// The target's partial block overrides the current's partial block, so a
/// range that starts and ends inside the same block is priced by
/// `target % 5` alone.
pub fn levels_in_block(block: u32, range: ProgressionRange) -> u32 {
    let mut levels = BLOCK;
    if block == range.current / BLOCK {
        levels = BLOCK - range.current % BLOCK;
    }
    if range.target > 0 && block == (range.target - 1) / BLOCK && range.target % BLOCK != 0 {
        levels = range.target % BLOCK;
    }
    levels
}

/// `ceil(base × levels)`, with negative or non-finite results as zero.
fn scale(base: f64, levels: u32) -> u64 {
    let scaled = (base * f64::from(levels)).ceil();
    if scaled.is_finite() && scaled > 0.0 {
        scaled as u64
    } else {
        0
    }
}

/// Potential axis for one potential type, priced block by block.
///
/// Each block emits `potential-material`, `potential-workbook` and
/// `potential-credits`, in that order, skipping zero quantities. Blocks past
/// the end of the potential table are skipped.
pub fn potential_requirements<C, T>(
    env: &Env<'_, C, T>,
    profile: &EntityProfile,
    potential: PotentialType,
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
    let tables = match env.tables() {
        Ok(tables) => tables,
        Err(error) => {
            tracing::debug!(%error, %potential, "skipping potential requirements");
            return entries;
        }
    };

    let config = env.config();
    let axis = Axis::Potential(potential);
    let workbook = config.workbook_id(potential);
    let base_material = profile.potential_material;
    if base_material.is_none() {
        tracing::debug!(entity = %profile.id, "no potential material declared");
    }

    for block in range.current / BLOCK..=(range.target - 1) / BLOCK {
        let Some(costs) = tables.potential_block(block as usize) else {
            tracing::debug!(block, "potential block missing from table");
            continue;
        };
        let levels = levels_in_block(block, range);
        let material = match base_material {
            Some(id) if costs.material_quality != 1 => {
                id.0.checked_add(1).map_or(MaterialId::UNKNOWN, MaterialId)
            }
            Some(id) => id,
            None => MaterialId::UNKNOWN,
        };

        let scaled = [
            (material, costs.material_quantity, RequirementKind::PotentialMaterial),
            (workbook, costs.workbook_quantity, RequirementKind::PotentialWorkbook),
            (config.currency_id, costs.credits_quantity, RequirementKind::PotentialCredits),
        ];
        entries.extend(scaled.into_iter().filter_map(|(material, base, kind)| {
            let quantity = scale(base, levels);
            (quantity > 0).then(|| RequirementEntry::new(material, quantity, kind, axis))
        }));
    }
    entries
}
