//! Material and equipment catalog loader.

use std::path::Path;

use planner_core::{CatalogData, CatalogIndex};

use crate::loaders::{LoadResult, read_file};

/// Loader for the catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load the raw catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<CatalogData> {
        let content = read_file(path)?;
        let data: CatalogData = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON at {:?}: {}", path, e))?;

        tracing::debug!(
            materials = data.materials.len(),
            equipment = data.equipment.len(),
            "loaded catalog"
        );
        Ok(data)
    }

    /// Load the catalog and index it for lookups.
    pub fn load_index(path: &Path) -> LoadResult<CatalogIndex> {
        Self::load(path).map(CatalogIndex::from_data)
    }
}
