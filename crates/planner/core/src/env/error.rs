//! Oracle access errors.

use crate::error::{ErrorSeverity, PlannerError};
use crate::state::MaterialId;

/// Errors that occur when accessing oracle data.
///
/// None of these abort a computation: calculators log them and fall back to
/// an empty or placeholder result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// CatalogOracle is not available in the environment.
    #[error("CatalogOracle not available")]
    CatalogNotAvailable,

    /// TablesOracle is not available in the environment.
    #[error("TablesOracle not available")]
    TablesNotAvailable,

    /// Material record was not found by id.
    #[error("material {0} not found in catalog")]
    MaterialNotFound(MaterialId),
}

impl PlannerError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Degraded
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            CatalogNotAvailable => "ORACLE_CATALOG_NOT_AVAILABLE",
            TablesNotAvailable => "ORACLE_TABLES_NOT_AVAILABLE",
            MaterialNotFound(_) => "ORACLE_MATERIAL_NOT_FOUND",
        }
    }
}
