/// Names of the integer cost tables.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum CostTable {
    /// Cumulative experience to reach a character level.
    CharacterXp,
    /// Cumulative currency to reach a character level.
    CharacterCredits,
    /// Per-level currency for the Public, Passive and ExtraPassive skills.
    SkillCredits,
    /// Per-level currency for the Ex skill.
    ExskillCredits,
    /// Cumulative currency per equipment tier.
    EquipmentCredits,
}

/// Base cost of one potential block, per level of the block.
///
/// Stored on disk as the tuple `(workbook, quality, material, credits)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "(f64, u32, f64, f64)", into = "(f64, u32, f64, f64)")
)]
pub struct PotentialBlock {
    pub workbook_quantity: f64,
    /// `1` consumes the declared potential material, anything else the next id.
    pub material_quality: u32,
    pub material_quantity: f64,
    pub credits_quantity: f64,
}

impl PotentialBlock {
    pub const fn new(
        workbook_quantity: f64,
        material_quality: u32,
        material_quantity: f64,
        credits_quantity: f64,
    ) -> Self {
        Self {
            workbook_quantity,
            material_quality,
            material_quantity,
            credits_quantity,
        }
    }
}

impl From<(f64, u32, f64, f64)> for PotentialBlock {
    fn from((workbook, quality, material, credits): (f64, u32, f64, f64)) -> Self {
        Self::new(workbook, quality, material, credits)
    }
}

impl From<PotentialBlock> for (f64, u32, f64, f64) {
    fn from(block: PotentialBlock) -> Self {
        (
            block.workbook_quantity,
            block.material_quality,
            block.material_quantity,
            block.credits_quantity,
        )
    }
}

/// Oracle providing the static progression cost tables.
///
/// Tables are 0-indexed; calculators translate 1-indexed levels themselves.
pub trait TablesOracle: Send + Sync {
    fn table(&self, table: CostTable) -> &[i64];

    fn potential_block(&self, block: usize) -> Option<PotentialBlock>;

    /// Value at `index`, `None` when the index is out of range.
    fn lookup(&self, table: CostTable, index: usize) -> Option<i64> {
        self.table(table).get(index).copied()
    }
}

/// In-memory cost tables, as loaded from `tables.toml`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostTables {
    pub character_xp: Vec<i64>,
    pub character_credits: Vec<i64>,
    pub skill_credits: Vec<i64>,
    pub exskill_credits: Vec<i64>,
    pub equipment_credits: Vec<i64>,
    pub potential: Vec<PotentialBlock>,
}

impl CostTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, table: CostTable, values: Vec<i64>) -> Self {
        *self.table_mut(table) = values;
        self
    }

    pub fn with_potential(mut self, blocks: Vec<PotentialBlock>) -> Self {
        self.potential = blocks;
        self
    }

    fn table_mut(&mut self, table: CostTable) -> &mut Vec<i64> {
        match table {
            CostTable::CharacterXp => &mut self.character_xp,
            CostTable::CharacterCredits => &mut self.character_credits,
            CostTable::SkillCredits => &mut self.skill_credits,
            CostTable::ExskillCredits => &mut self.exskill_credits,
            CostTable::EquipmentCredits => &mut self.equipment_credits,
        }
    }
}

impl TablesOracle for CostTables {
    fn table(&self, table: CostTable) -> &[i64] {
        match table {
            CostTable::CharacterXp => &self.character_xp,
            CostTable::CharacterCredits => &self.character_credits,
            CostTable::SkillCredits => &self.skill_credits,
            CostTable::ExskillCredits => &self.exskill_credits,
            CostTable::EquipmentCredits => &self.equipment_credits,
        }
    }

    fn potential_block(&self, block: usize) -> Option<PotentialBlock> {
        self.potential.get(block).copied()
    }
}
