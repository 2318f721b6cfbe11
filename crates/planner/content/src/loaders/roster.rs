//! Roster loader.

use std::path::Path;

use planner_core::{Roster, RosterEntry};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Roster structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub entities: Vec<RosterEntry>,
}

/// Loader for the planned roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load the roster from a RON file.
    ///
    /// Every stored range is checked against the edit rules of its axis; an
    /// entity with an invalid range is rejected with its id in the error.
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        let file: RosterFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON at {:?}: {}", path, e))?;

        for entry in &file.entities {
            Self::validate(entry)?;
        }
        tracing::debug!(entities = file.entities.len(), "loaded roster");

        Ok(file.entities.into_iter().collect())
    }

    fn validate(entry: &RosterEntry) -> LoadResult<()> {
        entry
            .progress
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid progress for entity {}: {}", entry.id(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_core::{EntityId, EquipmentCategory, PotentialType, ProgressionRange, SkillType};

    fn write(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.ron");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_partial_progress_with_defaults() {
        let (_dir, path) = write(
            r#"(
                entities: [
                    (
                        profile: (id: 2, name: "Hoshino", potential_material: Some(300)),
                        progress: (
                            character: (current: 40, target: 45),
                            potentials: { attack: (current: 0, target: 7) },
                            equipment: { Hat: (current: 1, target: 3) },
                        ),
                    ),
                    (profile: (id: 1, name: "Aru")),
                ],
            )"#,
        );

        let roster = RosterLoader::load(&path).unwrap();
        assert_eq!(
            roster.iter().map(RosterEntry::id).collect::<Vec<_>>(),
            vec![EntityId(1), EntityId(2)]
        );

        let hoshino = roster.get(EntityId(2)).unwrap();
        assert_eq!(hoshino.progress.character, ProgressionRange::new(40, 45));
        assert_eq!(
            hoshino.progress.potential(PotentialType::Attack),
            ProgressionRange::new(0, 7)
        );
        assert_eq!(
            hoshino.progress.equipment.get(&EquipmentCategory::Hat),
            Some(&ProgressionRange::new(1, 3))
        );
        assert_eq!(
            hoshino.progress.skill(SkillType::Ex),
            ProgressionRange::at(1)
        );
    }

    #[test]
    fn rejects_target_below_current() {
        let (_dir, path) = write(
            r#"(entities: [(profile: (id: 3, name: "Serika"), progress: (character: (current: 50, target: 10)))])"#,
        );

        let err = RosterLoader::load(&path).unwrap_err().to_string();
        assert!(err.contains("#3"), "{err}");
    }
}
