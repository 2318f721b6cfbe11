//! Runtime wrappers around the static planner oracles.
//!
//! [`OracleManager`] bundles the indexed catalog and the cost tables so the
//! runtime can build [`planner_core::PlannerEnv`] snapshots on demand. Cost
//! tables never change after startup; owned quantities in the catalog are the
//! only mutable part and are updated copy-on-write.
use std::sync::Arc;

use planner_core::{CatalogIndex, CostTables, Env, MaterialId, OracleError, PlannerConfig, PlannerEnv};

/// Manages all oracle implementations and provides unified access
#[derive(Clone, Debug)]
pub struct OracleManager {
    pub(crate) catalog: Arc<CatalogIndex>,
    pub(crate) tables: Arc<CostTables>,
    pub(crate) config: PlannerConfig,
}

impl OracleManager {
    pub fn new(catalog: Arc<CatalogIndex>, tables: Arc<CostTables>, config: PlannerConfig) -> Self {
        Self {
            catalog,
            tables,
            config,
        }
    }

    /// Converts the oracle manager into a [`PlannerEnv`] for planner-core.
    pub fn as_planner_env(&self) -> PlannerEnv<'_> {
        Env::with_all(self.catalog.as_ref(), self.tables.as_ref(), self.config).into_planner_env()
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn tables(&self) -> &CostTables {
        &self.tables
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Updates the owned quantity of a catalog material.
    ///
    /// Clones the catalog first when another manager still shares it.
    pub fn set_owned_quantity(
        &mut self,
        material: MaterialId,
        quantity: u64,
    ) -> Result<(), OracleError> {
        Arc::make_mut(&mut self.catalog).set_owned_quantity(material, quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::{CatalogOracle, MaterialRecord};

    fn manager() -> OracleManager {
        let mut catalog = CatalogIndex::new();
        catalog.insert_material(MaterialRecord::new(MaterialId(10), "Note").with_owned(3));
        OracleManager::new(
            Arc::new(catalog),
            Arc::new(CostTables::new()),
            PlannerConfig::default(),
        )
    }

    #[test]
    fn owned_quantity_updates_do_not_leak_into_clones() {
        let original = manager();
        let mut edited = original.clone();

        edited.set_owned_quantity(MaterialId(10), 40).unwrap();

        assert_eq!(edited.as_planner_env().owned_quantity(MaterialId(10)), 40);
        assert_eq!(original.catalog().owned_quantity(MaterialId(10)), 3);
    }

    #[test]
    fn unknown_material_is_rejected() {
        let mut manager = manager();
        assert_eq!(
            manager.set_owned_quantity(MaterialId(11), 1),
            Err(OracleError::MaterialNotFound(MaterialId(11)))
        );
    }
}
