use crate::state::{MaterialId, PotentialType};

/// Planner constants and tunable parameters.
///
/// Fixed ids and milestone costs that the calculators apply on top of the
/// cost tables. Loaded from `config.toml`; every field falls back to the
/// default when omitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Material id of the in-game currency (credits).
    pub currency_id: MaterialId,
    /// Workbook material ids, indexed by [`PotentialType::workbook_index`].
    pub workbook_ids: [MaterialId; 3],
    /// Rare material consumed once when a non-Ex skill crosses the milestone level.
    pub skill_special_material_id: MaterialId,
    /// Skill level whose upgrade carries the one-time milestone cost.
    pub skill_milestone_level: u32,
    /// Currency charged once at the skill milestone, independent of the tables.
    pub skill_milestone_credits: u64,
}

impl PlannerConfig {
    // ===== compile-time constants =====
    /// Potential levels are priced in blocks of this many levels.
    pub const POTENTIAL_BLOCK_SIZE: u32 = 5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CURRENCY_ID: MaterialId = MaterialId(5);
    pub const DEFAULT_WORKBOOK_IDS: [MaterialId; 3] =
        [MaterialId(2000), MaterialId(2001), MaterialId(2002)];
    pub const DEFAULT_SKILL_SPECIAL_MATERIAL_ID: MaterialId = MaterialId(9999);
    pub const DEFAULT_SKILL_MILESTONE_LEVEL: u32 = 9;
    pub const DEFAULT_SKILL_MILESTONE_CREDITS: u64 = 4_000_000;

    pub const fn new() -> Self {
        Self {
            currency_id: Self::DEFAULT_CURRENCY_ID,
            workbook_ids: Self::DEFAULT_WORKBOOK_IDS,
            skill_special_material_id: Self::DEFAULT_SKILL_SPECIAL_MATERIAL_ID,
            skill_milestone_level: Self::DEFAULT_SKILL_MILESTONE_LEVEL,
            skill_milestone_credits: Self::DEFAULT_SKILL_MILESTONE_CREDITS,
        }
    }

    pub const fn with_currency_id(mut self, currency_id: MaterialId) -> Self {
        self.currency_id = currency_id;
        self
    }

    /// Returns the workbook consumed by the given potential type.
    pub const fn workbook_id(&self, potential: PotentialType) -> MaterialId {
        self.workbook_ids[potential.workbook_index()]
    }

    /// Returns true if `material` is the currency.
    pub fn is_currency(&self, material: MaterialId) -> bool {
        material == self.currency_id
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
