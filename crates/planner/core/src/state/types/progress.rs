use std::collections::BTreeMap;
use std::ops::Range;

use super::{Axis, EntityProfile, EquipmentCategory, PotentialType, SkillType};
use crate::state::ProgressError;

/// A `current → target` span on one axis.
///
/// `target <= current` means there is nothing to do; calculators return no
/// entries for such ranges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressionRange {
    pub current: u32,
    pub target: u32,
}

impl ProgressionRange {
    pub const fn new(current: u32, target: u32) -> Self {
        Self { current, target }
    }

    /// A range with nothing left to do.
    pub const fn at(level: u32) -> Self {
        Self::new(level, level)
    }

    #[inline]
    pub const fn is_pending(&self) -> bool {
        self.current < self.target
    }

    /// Levels to upgrade from, `current..target`. Empty when not pending.
    #[inline]
    pub fn steps(&self) -> Range<u32> {
        self.current..self.target
    }

    /// Checks the edit rules for `axis`: `current >= minimum` and `target >= current`.
    pub fn validate(self, axis: Axis) -> Result<Self, ProgressError> {
        let minimum = axis.minimum_level();
        if self.current >= minimum && self.target >= self.current {
            Ok(self)
        } else {
            Err(ProgressError::InvalidRange {
                axis,
                current: self.current,
                target: self.target,
                minimum,
            })
        }
    }
}

/// Current and target state of one entity on every axis.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EntityProgress {
    pub character: ProgressionRange,
    pub skills: BTreeMap<SkillType, ProgressionRange>,
    pub potentials: BTreeMap<PotentialType, ProgressionRange>,
    /// Only categories present here are planned.
    pub equipment: BTreeMap<EquipmentCategory, ProgressionRange>,
}

impl Default for EntityProgress {
    fn default() -> Self {
        Self {
            character: ProgressionRange::at(1),
            skills: SkillType::ALL
                .into_iter()
                .map(|skill| (skill, ProgressionRange::at(1)))
                .collect(),
            potentials: PotentialType::ALL
                .into_iter()
                .map(|potential| (potential, ProgressionRange::at(0)))
                .collect(),
            equipment: BTreeMap::new(),
        }
    }
}

impl EntityProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skill(&self, skill: SkillType) -> ProgressionRange {
        self.skills.get(&skill).copied().unwrap_or(ProgressionRange::at(1))
    }

    pub fn potential(&self, potential: PotentialType) -> ProgressionRange {
        self.potentials
            .get(&potential)
            .copied()
            .unwrap_or(ProgressionRange::at(0))
    }

    /// Returns the stored range for `axis`, if the axis is tracked.
    pub fn range(&self, axis: Axis) -> Option<ProgressionRange> {
        match axis {
            Axis::Level => Some(self.character),
            Axis::Skill(skill) => self.skills.get(&skill).copied(),
            Axis::Potential(potential) => self.potentials.get(&potential).copied(),
            Axis::Equipment(category) => self.equipment.get(&category).copied(),
        }
    }

    /// Validates and stores a range for `axis`.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::InvalidRange`] and leaves state untouched when
    /// the range breaks the axis rules.
    pub fn set_range(&mut self, axis: Axis, range: ProgressionRange) -> Result<(), ProgressError> {
        let range = range.validate(axis)?;
        match axis {
            Axis::Level => self.character = range,
            Axis::Skill(skill) => {
                self.skills.insert(skill, range);
            }
            Axis::Potential(potential) => {
                self.potentials.insert(potential, range);
            }
            Axis::Equipment(category) => {
                self.equipment.insert(category, range);
            }
        }
        Ok(())
    }

    /// Every tracked `(axis, range)` pair, level first.
    pub fn ranges(&self) -> impl Iterator<Item = (Axis, ProgressionRange)> + '_ {
        let skills = self
            .skills
            .iter()
            .map(|(&skill, &range)| (Axis::Skill(skill), range));
        let potentials = self
            .potentials
            .iter()
            .map(|(&potential, &range)| (Axis::Potential(potential), range));
        let equipment = self
            .equipment
            .iter()
            .map(|(&category, &range)| (Axis::Equipment(category), range));

        std::iter::once((Axis::Level, self.character))
            .chain(skills)
            .chain(potentials)
            .chain(equipment)
    }

    /// Checks every tracked range against its axis rules.
    pub fn validate(&self) -> Result<(), ProgressError> {
        self.ranges()
            .try_for_each(|(axis, range)| range.validate(axis).map(drop))
    }

    /// Bulk toggle: every skill at its max level (`checked`) or back to `1 → 1`.
    ///
    /// Skills without a known max level are left as they are.
    pub fn max_all_skills(&mut self, profile: &EntityProfile, checked: bool) {
        for skill in SkillType::ALL {
            let Some(max) = profile.max_skill_level(skill) else {
                continue;
            };
            let range = if checked {
                ProgressionRange::at(max)
            } else {
                ProgressionRange::at(1)
            };
            self.skills.insert(skill, range);
        }
    }

    /// Bulk toggle: every skill target at its max level, clamping current to
    /// max (`checked`), or every target pulled back to current.
    pub fn max_target_skills(&mut self, profile: &EntityProfile, checked: bool) {
        for skill in SkillType::ALL {
            let range = self.skill(skill);
            let updated = if checked {
                let Some(max) = profile.max_skill_level(skill) else {
                    continue;
                };
                ProgressionRange::new(range.current.min(max), max)
            } else {
                ProgressionRange::at(range.current)
            };
            self.skills.insert(skill, updated);
        }
    }

    /// True when every skill sits at its max level on both ends.
    pub fn all_skills_maxed(&self, profile: &EntityProfile) -> bool {
        SkillType::ALL.into_iter().all(|skill| {
            let range = self.skill(skill);
            profile
                .max_skill_level(skill)
                .is_some_and(|max| range.current == max && range.target == max)
        })
    }

    /// True when every skill target is its max level.
    pub fn target_skills_maxed(&self, profile: &EntityProfile) -> bool {
        SkillType::ALL.into_iter().all(|skill| {
            profile
                .max_skill_level(skill)
                .is_some_and(|max| self.skill(skill).target == max)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EntityId;

    fn profile() -> EntityProfile {
        SkillType::ALL
            .into_iter()
            .fold(EntityProfile::new(EntityId(10), "Hina"), |profile, skill| {
                let max = if skill.is_ex() { 5 } else { 10 };
                profile.with_max_skill_level(skill, max)
            })
    }

    #[test]
    fn defaults_match_fresh_entity() {
        let progress = EntityProgress::default();
        assert_eq!(progress.character, ProgressionRange::at(1));
        assert_eq!(progress.skill(SkillType::Ex), ProgressionRange::at(1));
        assert_eq!(progress.potential(PotentialType::MaxHp), ProgressionRange::at(0));
        assert!(progress.equipment.is_empty());
    }

    #[test]
    fn rejects_target_below_current() {
        let mut progress = EntityProgress::default();
        let err = progress
            .set_range(Axis::Level, ProgressionRange::new(40, 30))
            .unwrap_err();
        assert!(matches!(err, ProgressError::InvalidRange { current: 40, .. }));
        assert_eq!(progress.character, ProgressionRange::at(1));
    }

    #[test]
    fn skill_current_must_be_at_least_one() {
        let mut progress = EntityProgress::default();
        assert!(
            progress
                .set_range(Axis::Skill(SkillType::Public), ProgressionRange::new(0, 3))
                .is_err()
        );
        assert!(
            progress
                .set_range(Axis::Potential(PotentialType::Attack), ProgressionRange::new(0, 3))
                .is_ok()
        );
    }

    #[test]
    fn validate_reports_first_bad_axis() {
        let mut progress = EntityProgress::default();
        assert!(progress.validate().is_ok());

        progress
            .equipment
            .insert(EquipmentCategory::Hat, ProgressionRange::new(3, 2));
        let err = progress.validate().unwrap_err();
        assert!(matches!(
            err,
            ProgressError::InvalidRange {
                axis: Axis::Equipment(EquipmentCategory::Hat),
                ..
            }
        ));
    }

    #[test]
    fn max_all_skills_toggles_both_ends() {
        let profile = profile();
        let mut progress = EntityProgress::default();

        progress.max_all_skills(&profile, true);
        assert!(progress.all_skills_maxed(&profile));
        assert_eq!(progress.skill(SkillType::Ex), ProgressionRange::at(5));

        progress.max_all_skills(&profile, false);
        assert_eq!(progress.skill(SkillType::Passive), ProgressionRange::at(1));
        assert!(!progress.target_skills_maxed(&profile));
    }

    #[test]
    fn max_target_skills_keeps_current() {
        let profile = profile();
        let mut progress = EntityProgress::default();
        progress
            .set_range(Axis::Skill(SkillType::Public), ProgressionRange::new(4, 4))
            .unwrap();

        progress.max_target_skills(&profile, true);
        assert_eq!(progress.skill(SkillType::Public), ProgressionRange::new(4, 10));
        assert!(progress.target_skills_maxed(&profile));
        assert!(!progress.all_skills_maxed(&profile));

        progress.max_target_skills(&profile, false);
        assert_eq!(progress.skill(SkillType::Public), ProgressionRange::at(4));
    }
}
