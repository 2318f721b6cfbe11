//! Roster state representation.
//!
//! This module owns the data structures that describe who is being planned
//! (profiles), where each entity stands and where it should go (progress), and
//! the roster that groups them. The engine only reads this state; edits go
//! through the validated setters on [`EntityProgress`].
mod error;
pub mod types;

pub use error::ProgressError;
pub use types::{
    Axis, EntityId, EntityProfile, EntityProgress, EquipmentCategory, MaterialId, PotentialType,
    ProgressionRange, Roster, RosterEntry, SkillMaterials, SkillType,
};
