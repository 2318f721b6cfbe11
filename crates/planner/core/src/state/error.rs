//! Progression edit errors.

use crate::error::{ErrorSeverity, PlannerError};
use crate::state::{Axis, EntityId};

/// Errors returned when a progression edit is rejected.
///
/// A rejected edit leaves the stored progress untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressError {
    /// Current level below the axis minimum, or target below current.
    #[error("invalid {axis} range {current}→{target} (minimum current level is {minimum})")]
    InvalidRange {
        axis: Axis,
        current: u32,
        target: u32,
        minimum: u32,
    },

    /// The roster has no entity with this id.
    #[error("entity {0} is not in the roster")]
    UnknownEntity(EntityId),
}

impl PlannerError for ProgressError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } => "PROGRESS_INVALID_RANGE",
            Self::UnknownEntity(_) => "PROGRESS_UNKNOWN_ENTITY",
        }
    }
}
