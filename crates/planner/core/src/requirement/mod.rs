//! Axis calculators and the consolidator.
//!
//! Each calculator maps one axis range of one entity to an ordered list of
//! [`RequirementEntry`] values. Calculators never fail: missing oracles, table
//! misses and absent recipes degrade to fewer (or no) entries, and a range
//! with `target <= current` yields nothing.
mod consolidate;
mod equipment;
mod level;
mod potential;
mod skill;

pub use consolidate::{ConsolidatedEntry, consolidate};
pub use equipment::{credits_needed, equipment_requirements};
pub use level::{experience_needed, level_requirements};
pub use potential::{levels_in_block, potential_requirements};
pub use skill::skill_requirements;

use crate::env::{CatalogOracle, Env, TablesOracle};
use crate::state::{Axis, EntityProfile, MaterialId, ProgressionRange, RosterEntry, SkillType};

/// What a requirement entry pays for.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case")]
pub enum RequirementKind {
    LevelCurrency,
    SkillCredits,
    SkillMaterial,
    SkillSpecial,
    PotentialMaterial,
    PotentialWorkbook,
    PotentialCredits,
    EquipmentMaterial,
    EquipmentCredits,
}

impl RequirementKind {
    /// Returns true for kinds that are always paid in the currency.
    pub const fn is_currency(self) -> bool {
        matches!(
            self,
            Self::LevelCurrency
                | Self::SkillCredits
                | Self::PotentialCredits
                | Self::EquipmentCredits
        )
    }
}

/// One itemized cost produced by an axis calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequirementEntry {
    pub material: MaterialId,
    pub quantity: u64,
    pub kind: RequirementKind,
    pub axis: Axis,
}

impl RequirementEntry {
    pub const fn new(material: MaterialId, quantity: u64, kind: RequirementKind, axis: Axis) -> Self {
        Self {
            material,
            quantity,
            kind,
            axis,
        }
    }
}

/// Runs the calculator for `axis` over `range`.
pub fn compute_requirements<C, T>(
    env: &Env<'_, C, T>,
    profile: &EntityProfile,
    axis: Axis,
    range: ProgressionRange,
) -> Vec<RequirementEntry>
where
    C: CatalogOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    match axis {
        Axis::Level => level_requirements(env, range),
        Axis::Skill(skill) => skill_requirements(env, profile, skill, range),
        Axis::Potential(potential) => potential_requirements(env, profile, potential, range),
        Axis::Equipment(category) => equipment_requirements(env, category, range),
    }
}

/// Every requirement of one roster entry, in axis order: level, skills,
/// potentials, then tracked equipment categories.
pub fn entity_requirements<C, T>(env: &Env<'_, C, T>, entry: &RosterEntry) -> Vec<RequirementEntry>
where
    C: CatalogOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    let profile = &entry.profile;
    let progress = &entry.progress;

    let mut entries = level_requirements(env, progress.character);
    for skill in SkillType::ALL {
        entries.extend(skill_requirements(env, profile, skill, progress.skill(skill)));
    }
    for (&potential, &range) in &progress.potentials {
        entries.extend(potential_requirements(env, profile, potential, range));
    }
    for (&category, &range) in &progress.equipment {
        entries.extend(equipment_requirements(env, category, range));
    }
    entries
}

/// Consolidated requirements of one roster entry.
pub fn entity_summary<C, T>(env: &Env<'_, C, T>, entry: &RosterEntry) -> Vec<ConsolidatedEntry>
where
    C: CatalogOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    consolidate(env, &entity_requirements(env, entry))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::config::PlannerConfig;
    use crate::env::{
        CatalogData, CatalogIndex, CostTable, CostTables, EquipmentRecord, MaterialRecord,
        PotentialBlock, RecipeComponent,
    };
    use crate::state::{EntityId, EntityProfile, EquipmentCategory, MaterialId, SkillMaterials, SkillType};

    pub const CREDITS: MaterialId = PlannerConfig::DEFAULT_CURRENCY_ID;

    /// Character tables: xp and credits grow by 100 per level, with
    /// `credits[39] = 100` and `credits[44] = 500` as fixed anchor points.
    pub fn tables() -> CostTables {
        let xp = (0..90).map(|level| level * 1_000).collect();
        let mut credits: Vec<i64> = (0..90).map(|level| level * 100).collect();
        credits[39] = 100;
        credits[44] = 500;

        CostTables::new()
            .with_table(CostTable::CharacterXp, xp)
            .with_table(CostTable::CharacterCredits, credits)
            .with_table(CostTable::SkillCredits, (1..=10).map(|level| level * 1_000).collect())
            .with_table(CostTable::ExskillCredits, (1..=5).map(|level| level * 5_000).collect())
            .with_table(CostTable::EquipmentCredits, vec![1_000, 3_000, 6_000, 10_000])
            .with_potential(vec![
                PotentialBlock::new(1.0, 1, 2.0, 10_000.0),
                PotentialBlock::new(1.5, 2, 2.5, 20_000.0),
            ])
    }

    pub fn catalog() -> CatalogIndex {
        let hat = |tier, recipe| EquipmentRecord {
            id: 1_000 + tier,
            name: format!("Hat T{tier}"),
            category: EquipmentCategory::Hat,
            tier,
            recipe,
        };

        CatalogIndex::from_data(CatalogData {
            materials: vec![
                MaterialRecord::new(CREDITS, "Credits").with_owned(50_000),
                MaterialRecord::new(MaterialId(100), "Note").with_owned(10),
                MaterialRecord::new(MaterialId(101), "Disc").with_owned(0),
                MaterialRecord::new(MaterialId(300), "Potential Core").with_owned(3),
                MaterialRecord::new(MaterialId(3001), "Hat Blueprint").with_owned(2),
            ],
            equipment: vec![
                hat(2, vec![RecipeComponent::new(103001, 5), RecipeComponent::new(1005, 700)]),
                hat(3, vec![RecipeComponent::new(103001, 10), RecipeComponent::new(103002, 4)]),
            ],
        })
    }

    pub fn profile() -> EntityProfile {
        let ids = (0..9).map(|_| vec![MaterialId(100), MaterialId(101)]).collect();
        let amounts = (1..=9).map(|level| vec![level, 0]).collect();
        EntityProfile::new(EntityId(1), "Shiroko")
            .with_skill_materials(SkillMaterials::new(ids, amounts))
            .with_ex_skill_materials(SkillMaterials::new(
                vec![vec![MaterialId(101)]; 4],
                vec![vec![2]; 4],
            ))
            .with_potential_material(MaterialId(300))
            .with_max_skill_level(SkillType::Ex, 5)
            .with_max_skill_level(SkillType::Public, 10)
            .with_max_skill_level(SkillType::Passive, 10)
            .with_max_skill_level(SkillType::ExtraPassive, 10)
    }
}
