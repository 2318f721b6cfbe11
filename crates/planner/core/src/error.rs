//! Common error infrastructure for planner-core.
//!
//! The requirement engine itself never fails: missing reference data degrades
//! to zero quantities or placeholder records. Errors only exist at the edges,
//! when an oracle is missing from the environment or when a caller submits an
//! invalid progression edit. Both share the classification below.

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Missing reference data; the engine degrades to an empty or zero result.
    Degraded,

    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: target below current, skill level 0
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Degraded => "degraded",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if the computation can continue with a best-effort result.
    pub const fn is_degradable(&self) -> bool {
        matches!(self, Self::Degraded)
    }
}

/// Common trait for all planner-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity by how the caller should react, not by impact
pub trait PlannerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_degraded_is_degradable() {
        assert!(ErrorSeverity::Degraded.is_degradable());
        assert!(!ErrorSeverity::Validation.is_degradable());
        assert!(!ErrorSeverity::Internal.is_degradable());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
