use std::fmt;

/// Identifier of a roster entity (one character being planned).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a catalog material.
///
/// Ascending id order is the output order of every report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MaterialId(pub u32);

impl MaterialId {
    /// Sort key for materials without a resolvable id.
    pub const UNKNOWN: Self = Self(0);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Derives a material id from an equipment recipe id by dropping its first
    /// two decimal digits (`103001` → `3001`, `1005` → `5`).
    ///
    /// Returns `None` when nothing numeric remains or the remainder is zero.
    pub fn from_recipe_raw(raw: u64) -> Option<Self> {
        let digits = raw.to_string();
        let tail = digits.get(2..).filter(|tail| !tail.is_empty())?;
        tail.parse::<u32>().ok().filter(|id| *id != 0).map(Self)
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
