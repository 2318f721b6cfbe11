//! Deterministic resource requirement engine for roster upgrade planning.
//!
//! `planner-core` turns per-entity progression ranges (character level, skill
//! ranks, potential ranks, equipment tiers) into itemized material demand,
//! merges that demand per material, and aggregates it across a roster against
//! the quantities the user owns. Everything here is a pure function of its
//! inputs: static cost tables and the material catalog are read through the
//! oracle traits in [`env`], entity state lives in [`state`].
//!
//! Data flows one way:
//! entity state + catalog + tables → [`requirement`] calculators →
//! [`requirement::consolidate`] → [`aggregate::aggregate`] → report.
pub mod aggregate;
pub mod config;
pub mod env;
pub mod error;
pub mod requirement;
pub mod state;

pub use aggregate::{
    AggregateReport, Attribution, Contribution, CreditsSummary, MaterialBalance, aggregate,
};
pub use config::PlannerConfig;
pub use env::{
    CatalogData, CatalogIndex, CatalogOracle, CostTable, CostTables, Env, EquipmentRecord,
    MaterialRecord, OracleError, PlannerEnv, PotentialBlock, RecipeComponent, TablesOracle,
};
pub use error::{ErrorSeverity, PlannerError};
pub use requirement::{
    ConsolidatedEntry, RequirementEntry, RequirementKind, consolidate, entity_requirements,
    entity_summary, experience_needed,
};
pub use state::{
    Axis, EntityId, EntityProfile, EntityProgress, EquipmentCategory, MaterialId, PotentialType,
    ProgressError, ProgressionRange, Roster, RosterEntry, SkillMaterials, SkillType,
};
