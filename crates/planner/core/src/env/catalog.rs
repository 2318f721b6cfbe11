//! Material and equipment catalog.
//!
//! [`CatalogData`] is the loadable form (flat lists, as stored on disk).
//! [`CatalogIndex`] indexes it once, by material id and by equipment
//! `(category, tier)`, and is what calculators query through [`CatalogOracle`].

use std::collections::{BTreeMap, HashMap};

use super::OracleError;
use crate::state::{EquipmentCategory, MaterialId};

/// Descriptive record of a material plus the quantity the user owns.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialRecord {
    pub id: MaterialId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub owned_quantity: u64,
}

impl MaterialRecord {
    pub fn new(id: MaterialId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: String::new(),
            category: String::new(),
            owned_quantity: 0,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_owned(mut self, owned_quantity: u64) -> Self {
        self.owned_quantity = owned_quantity;
        self
    }

    /// Stand-in for an id the catalog does not know, so totals stay correct.
    pub fn placeholder(id: MaterialId) -> Self {
        Self {
            id,
            name: format!("Unknown ({})", id.0),
            icon: id.0.to_string(),
            category: String::new(),
            owned_quantity: 0,
        }
    }
}

/// One recipe line: a raw recipe id and how many are consumed.
///
/// The material id is derived with [`MaterialId::from_recipe_raw`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecipeComponent {
    pub raw_id: u64,
    pub quantity: u64,
}

impl RecipeComponent {
    pub const fn new(raw_id: u64, quantity: u64) -> Self {
        Self { raw_id, quantity }
    }
}

/// An equipment piece of a given category and tier, with the recipe that
/// crafts it from the previous tier.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentRecord {
    pub id: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub category: EquipmentCategory,
    pub tier: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub recipe: Vec<RecipeComponent>,
}

/// Read access to the material and equipment catalog.
pub trait CatalogOracle: Send + Sync {
    fn material(&self, id: MaterialId) -> Option<&MaterialRecord>;

    /// Recipe of the equipment piece at `(category, tier)`.
    fn equipment_recipe(&self, category: EquipmentCategory, tier: u32) -> Option<&[RecipeComponent]>;

    /// Every material id known to the catalog, ascending.
    fn material_ids(&self) -> Vec<MaterialId>;

    /// Quantity owned, `0` for unknown materials.
    fn owned_quantity(&self, id: MaterialId) -> u64 {
        self.material(id).map_or(0, |record| record.owned_quantity)
    }

    /// Like [`CatalogOracle::material`], but reports a miss as an error.
    fn try_material(&self, id: MaterialId) -> Result<&MaterialRecord, OracleError> {
        self.material(id).ok_or(OracleError::MaterialNotFound(id))
    }

    /// Returns the catalog record, or a placeholder when the id is unknown.
    fn resolve(&self, id: MaterialId) -> MaterialRecord {
        match self.try_material(id) {
            Ok(record) => record.clone(),
            Err(error) => {
                tracing::debug!(%error, "using placeholder record");
                MaterialRecord::placeholder(id)
            }
        }
    }
}

/// Catalog as loaded from disk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CatalogData {
    pub materials: Vec<MaterialRecord>,
    pub equipment: Vec<EquipmentRecord>,
}

/// Indexed catalog built once from [`CatalogData`].
///
/// Later duplicates of a material id or of an equipment `(category, tier)`
/// replace earlier ones.
#[derive(Clone, Debug, Default)]
pub struct CatalogIndex {
    materials: BTreeMap<MaterialId, MaterialRecord>,
    recipes: HashMap<(EquipmentCategory, u32), Vec<RecipeComponent>>,
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_data(data: CatalogData) -> Self {
        let mut index = Self::new();
        for material in data.materials {
            index.insert_material(material);
        }
        for equipment in data.equipment {
            index.insert_equipment(equipment);
        }
        index
    }

    pub fn insert_material(&mut self, material: MaterialRecord) {
        self.materials.insert(material.id, material);
    }

    pub fn insert_equipment(&mut self, equipment: EquipmentRecord) {
        self.recipes
            .insert((equipment.category, equipment.tier), equipment.recipe);
    }

    /// Updates the owned quantity of a known material.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::MaterialNotFound`] for ids outside the catalog.
    pub fn set_owned_quantity(&mut self, id: MaterialId, quantity: u64) -> Result<(), OracleError> {
        let record = self
            .materials
            .get_mut(&id)
            .ok_or(OracleError::MaterialNotFound(id))?;
        record.owned_quantity = quantity;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl From<CatalogData> for CatalogIndex {
    fn from(data: CatalogData) -> Self {
        Self::from_data(data)
    }
}

impl CatalogOracle for CatalogIndex {
    fn material(&self, id: MaterialId) -> Option<&MaterialRecord> {
        self.materials.get(&id)
    }

    fn equipment_recipe(&self, category: EquipmentCategory, tier: u32) -> Option<&[RecipeComponent]> {
        self.recipes.get(&(category, tier)).map(Vec::as_slice)
    }

    fn material_ids(&self) -> Vec<MaterialId> {
        self.materials.keys().copied().collect()
    }
}
