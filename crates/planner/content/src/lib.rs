//! Data-driven planner content and loaders.
//!
//! This crate provides loaders for the RON/TOML data files the planner reads:
//! - Progression cost tables (TOML)
//! - Material and equipment catalog, including owned quantities (RON)
//! - Roster of planned entities with their progress (RON)
//! - Planner constants (TOML)
//!
//! All loaders deserialize planner-core types directly with serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogLoader, ConfigLoader, ContentFactory, LoadResult, RosterFile, RosterLoader,
    TablesLoader,
};
