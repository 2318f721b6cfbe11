use super::{RequirementEntry, RequirementKind};
use crate::env::{CatalogOracle, CostTable, Env, TablesOracle};
use crate::state::{Axis, EntityProfile, MaterialId, ProgressionRange, SkillType};

fn credits_table(skill: SkillType) -> CostTable {
    if skill.is_ex() {
        CostTable::ExskillCredits
    } else {
        CostTable::SkillCredits
    }
}

/// Skill axis for one skill type.
///
/// For every level `L` in `current..target` the entries are, in order: the
/// milestone pair (non-Ex skills at the milestone level only), one
/// `skill-material` entry per non-zero `(id, amount)` pair of row `L - 1`,
/// then that level's `skill-credits`. A level whose material row is missing
/// contributes only the milestone pair.
pub fn skill_requirements<C, T>(
    env: &Env<'_, C, T>,
    profile: &EntityProfile,
    skill: SkillType,
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
            tracing::debug!(%error, %skill, "skipping skill requirements");
            return entries;
        }
    };

    let materials = profile.materials_for(skill);
    if materials.ids.is_empty() || materials.amounts.is_empty() {
        tracing::debug!(entity = %profile.id, %skill, "no skill material table");
        return entries;
    }

    let config = env.config();
    let axis = Axis::Skill(skill);
    for level in range.steps() {
        if level == config.skill_milestone_level && !skill.is_ex() {
            entries.push(RequirementEntry::new(
                config.skill_special_material_id,
                1,
                RequirementKind::SkillSpecial,
                axis,
            ));
            entries.push(RequirementEntry::new(
                config.currency_id,
                config.skill_milestone_credits,
                RequirementKind::SkillCredits,
                axis,
            ));
        }

        let Some((ids, amounts)) = materials.level(level) else {
            continue;
        };
        entries.extend(
            ids.iter()
                .zip(amounts)
                .filter(|&(&id, &amount)| id != MaterialId::UNKNOWN && amount > 0)
                .map(|(&id, &amount)| {
                    RequirementEntry::new(id, amount, RequirementKind::SkillMaterial, axis)
                }),
        );

        let credits = level
            .checked_sub(1)
            .and_then(|index| tables.lookup(credits_table(skill), index as usize))
            .and_then(|credits| u64::try_from(credits).ok())
            .filter(|credits| *credits > 0);
        if let Some(credits) = credits {
            entries.push(RequirementEntry::new(
                config.currency_id,
                credits,
                RequirementKind::SkillCredits,
                axis,
            ));
        }
    }
    entries
}
