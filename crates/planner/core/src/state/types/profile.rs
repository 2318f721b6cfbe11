use std::collections::BTreeMap;

use super::{EntityId, MaterialId, SkillType};

/// Per-level skill upgrade materials.
///
/// Both lists are indexed by `level - 1`: entry `i` holds what upgrading from
/// level `i + 1` to `i + 2` consumes. `ids[i][j]` pairs with `amounts[i][j]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkillMaterials {
    pub ids: Vec<Vec<MaterialId>>,
    pub amounts: Vec<Vec<u64>>,
}

impl SkillMaterials {
    pub fn new(ids: Vec<Vec<MaterialId>>, amounts: Vec<Vec<u64>>) -> Self {
        Self { ids, amounts }
    }

    /// Returns the id and amount lists for upgrading from `level`.
    ///
    /// `None` when either list has no row for that level.
    pub fn level(&self, level: u32) -> Option<(&[MaterialId], &[u64])> {
        let index = usize::try_from(level.checked_sub(1)?).ok()?;
        let ids = self.ids.get(index)?;
        let amounts = self.amounts.get(index)?;
        Some((ids.as_slice(), amounts.as_slice()))
    }
}

/// Static per-entity data supplied by the catalog source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityProfile {
    pub id: EntityId,
    pub name: String,
    /// Materials for the Ex skill.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ex_skill_materials: SkillMaterials,
    /// Materials shared by the Public, Passive and ExtraPassive skills.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skill_materials: SkillMaterials,
    /// Base id of the material consumed by potential upgrades. Higher quality
    /// blocks consume the next id.
    #[cfg_attr(feature = "serde", serde(default))]
    pub potential_material: Option<MaterialId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_skill_levels: BTreeMap<SkillType, u32>,
}

impl EntityProfile {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_ex_skill_materials(mut self, materials: SkillMaterials) -> Self {
        self.ex_skill_materials = materials;
        self
    }

    pub fn with_skill_materials(mut self, materials: SkillMaterials) -> Self {
        self.skill_materials = materials;
        self
    }

    pub fn with_potential_material(mut self, material: MaterialId) -> Self {
        self.potential_material = Some(material);
        self
    }

    pub fn with_max_skill_level(mut self, skill: SkillType, level: u32) -> Self {
        self.max_skill_levels.insert(skill, level);
        self
    }

    /// Returns the material table that prices the given skill type.
    pub fn materials_for(&self, skill: SkillType) -> &SkillMaterials {
        if skill.is_ex() {
            &self.ex_skill_materials
        } else {
            &self.skill_materials
        }
    }

    pub fn max_skill_level(&self, skill: SkillType) -> Option<u32> {
        self.max_skill_levels.get(&skill).copied()
    }
}
