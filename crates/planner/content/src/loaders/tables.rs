//! Progression cost tables loader.

use std::path::Path;

use planner_core::{CostTable, CostTables, TablesOracle};

use crate::loaders::{LoadResult, read_file};

/// Loader for cost tables from TOML files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load cost tables from a TOML file.
    ///
    /// Every table is optional; a missing table behaves as an empty one and
    /// the calculators that need it degrade to zero cost.
    pub fn load(path: &Path) -> LoadResult<CostTables> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML at {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<CostTables> {
        let tables: CostTables = toml::from_str(content)?;

        for table in [
            CostTable::CharacterXp,
            CostTable::CharacterCredits,
            CostTable::SkillCredits,
            CostTable::ExskillCredits,
            CostTable::EquipmentCredits,
        ] {
            if tables.table(table).is_empty() {
                tracing::warn!(%table, "cost table is empty");
            }
        }
        tracing::debug!(potential_blocks = tables.potential.len(), "loaded cost tables");

        Ok(tables)
    }
}
