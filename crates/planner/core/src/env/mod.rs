//! Traits describing read-only reference data.
//!
//! Oracles expose the material/equipment catalog and the progression cost
//! tables. The [`Env`] aggregate bundles them with the [`PlannerConfig`] so
//! calculators can reach everything they need without coupling to concrete
//! storage.
mod catalog;
mod error;
mod tables;

pub use catalog::{
    CatalogData, CatalogIndex, CatalogOracle, EquipmentRecord, MaterialRecord, RecipeComponent,
};
pub use error::OracleError;
pub use tables::{CostTable, CostTables, PotentialBlock, TablesOracle};

use crate::config::PlannerConfig;
use crate::state::MaterialId;

/// Aggregates the read-only oracles consumed by the calculators.
///
/// Either oracle may be absent; calculators treat a missing oracle as missing
/// reference data and degrade to empty output.
pub struct Env<'a, C, T>
where
    C: CatalogOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    catalog: Option<&'a C>,
    tables: Option<&'a T>,
    config: PlannerConfig,
}

impl<C, T> Clone for Env<'_, C, T>
where
    C: CatalogOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, T> Copy for Env<'_, C, T>
where
    C: CatalogOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
}

pub type PlannerEnv<'a> = Env<'a, dyn CatalogOracle + 'a, dyn TablesOracle + 'a>;

impl<'a, C, T> Env<'a, C, T>
where
    C: CatalogOracle + ?Sized,
    T: TablesOracle + ?Sized,
{
    pub fn new(catalog: Option<&'a C>, tables: Option<&'a T>, config: PlannerConfig) -> Self {
        Self {
            catalog,
            tables,
            config,
        }
    }

    pub fn with_all(catalog: &'a C, tables: &'a T, config: PlannerConfig) -> Self {
        Self::new(Some(catalog), Some(tables), config)
    }

    pub fn empty() -> Self {
        Self::new(None, None, PlannerConfig::default())
    }

    /// Returns the CatalogOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CatalogNotAvailable` if no catalog was provided.
    pub fn catalog(&self) -> Result<&'a C, OracleError> {
        self.catalog.ok_or(OracleError::CatalogNotAvailable)
    }

    /// Returns the TablesOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TablesNotAvailable` if no tables were provided.
    pub fn tables(&self) -> Result<&'a T, OracleError> {
        self.tables.ok_or(OracleError::TablesNotAvailable)
    }

    #[inline]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Catalog record for `id`, or a placeholder when the catalog is missing
    /// or does not know the id.
    pub fn resolve_material(&self, id: MaterialId) -> MaterialRecord {
        match self.catalog() {
            Ok(catalog) => catalog.resolve(id),
            Err(error) => {
                tracing::debug!(%error, material = %id, "using placeholder record");
                MaterialRecord::placeholder(id)
            }
        }
    }

    /// Owned quantity of `id`, `0` without a catalog.
    pub fn owned_quantity(&self, id: MaterialId) -> u64 {
        self.catalog.map_or(0, |catalog| catalog.owned_quantity(id))
    }
}

impl<'a, C, T> Env<'a, C, T>
where
    C: CatalogOracle + 'a,
    T: TablesOracle + 'a,
{
    /// Converts this environment into a trait-object based `PlannerEnv` (consumes self).
    pub fn into_planner_env(self) -> PlannerEnv<'a> {
        self.as_planner_env()
    }

    /// Converts this environment into a trait-object based `PlannerEnv` (borrows self).
    pub fn as_planner_env(&self) -> PlannerEnv<'a> {
        let catalog: Option<&'a dyn CatalogOracle> = self.catalog.map(|catalog| catalog as _);
        let tables: Option<&'a dyn TablesOracle> = self.tables.map(|tables| tables as _);
        Env::new(catalog, tables, self.config)
    }
}
