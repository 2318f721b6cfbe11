pub mod axis;
pub mod common;
pub mod profile;
pub mod progress;
pub mod roster;

pub use axis::{Axis, EquipmentCategory, PotentialType, SkillType};
pub use common::{EntityId, MaterialId};
pub use profile::{EntityProfile, SkillMaterials};
pub use progress::{EntityProgress, ProgressionRange};
pub use roster::{Roster, RosterEntry};
