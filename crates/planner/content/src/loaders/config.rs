//! Planner configuration loader.

use std::path::Path;

use planner_core::PlannerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for planner constants from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Omitted keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<PlannerConfig> {
        let content = read_file(path)?;
        let config: PlannerConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }

    /// Like [`ConfigLoader::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> LoadResult<PlannerConfig> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!(path = %path.display(), "no planner config, using defaults");
            Ok(PlannerConfig::default())
        }
    }
}
