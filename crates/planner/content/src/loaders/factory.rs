//! Content factory for loading planner data from a data directory.

use std::path::{Path, PathBuf};

use planner_core::{CatalogIndex, CostTables, PlannerConfig, Roster};

use crate::loaders::{CatalogLoader, ConfigLoader, LoadResult, RosterLoader, TablesLoader};

/// Content factory that loads all planner content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml    (optional)
/// ├── tables.toml
/// ├── catalog.ron
/// └── roster.ron     (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load planner constants from `config.toml`, or the defaults without one.
    pub fn load_config(&self) -> LoadResult<PlannerConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join("config.toml"))
    }

    /// Load cost tables from `tables.toml`.
    pub fn load_tables(&self) -> LoadResult<CostTables> {
        TablesLoader::load(&self.data_dir.join("tables.toml"))
    }

    /// Load and index the catalog from `catalog.ron`.
    pub fn load_catalog(&self) -> LoadResult<CatalogIndex> {
        CatalogLoader::load_index(&self.data_dir.join("catalog.ron"))
    }

    /// Load the roster from `roster.ron`. A missing file is an empty roster.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        let path = self.data_dir.join("roster.ron");
        if !path.exists() {
            tracing::info!(path = %path.display(), "no roster file, starting empty");
            return Ok(Roster::new());
        }
        RosterLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
