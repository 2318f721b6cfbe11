//! Progression axes: the independent dimensions an entity can be upgraded along.

use std::fmt;

/// Skill slots. `Ex` follows its own material and credit tables; the other
/// three share one set.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum SkillType {
    Ex,
    Public,
    Passive,
    ExtraPassive,
}

impl SkillType {
    pub const ALL: [Self; 4] = [Self::Ex, Self::Public, Self::Passive, Self::ExtraPassive];

    /// Returns true for the skill type priced by the distinguished tables.
    #[inline]
    pub const fn is_ex(self) -> bool {
        matches!(self, Self::Ex)
    }
}

/// Potential (stat enhancement) tracks, each advanced in blocks of five levels.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PotentialType {
    Attack,
    MaxHp,
    HealPower,
}

impl PotentialType {
    pub const ALL: [Self; 3] = [Self::Attack, Self::MaxHp, Self::HealPower];

    /// Index into the workbook id table: `maxhp → 0`, `attack → 1`, anything else `→ 2`.
    #[inline]
    pub const fn workbook_index(self) -> usize {
        match self {
            Self::MaxHp => 0,
            Self::Attack => 1,
            Self::HealPower => 2,
        }
    }
}

/// Equipment slots. Each category has its own tier ladder in the catalog.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum EquipmentCategory {
    Hat,
    Gloves,
    Shoes,
    Bag,
    Badge,
    Hairpin,
    Charm,
    Watch,
    Necklace,
}

/// One progression dimension of an entity.
///
/// Carried on every requirement entry so demand can be attributed back to the
/// axis that caused it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Character level (currency only).
    Level,
    Skill(SkillType),
    Potential(PotentialType),
    Equipment(EquipmentCategory),
}

impl Axis {
    /// Lowest valid `current` value on this axis.
    pub const fn minimum_level(self) -> u32 {
        match self {
            Self::Potential(_) => 0,
            Self::Level | Self::Skill(_) | Self::Equipment(_) => 1,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level => write!(f, "level"),
            Self::Skill(skill) => write!(f, "{skill} skill"),
            Self::Potential(potential) => write!(f, "{potential} potential"),
            Self::Equipment(category) => write!(f, "{category} equipment"),
        }
    }
}
