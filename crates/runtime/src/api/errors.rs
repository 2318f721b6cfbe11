//! Unified error types surfaced by the runtime API.
//!
//! Wraps worker coordination failures, repository failures and rejected edits
//! so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use planner_core::{ErrorSeverity, OracleError, PlannerError, ProgressError};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("planner worker command channel closed")]
    CommandChannelClosed,

    #[error("planner worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("planner worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error(transparent)]
    Progress(#[from] ProgressError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl RuntimeError {
    /// Severity of rejected edits and lookups; `None` for infrastructure failures.
    pub fn severity(&self) -> Option<ErrorSeverity> {
        match self {
            RuntimeError::Progress(error) => Some(error.severity()),
            RuntimeError::Oracle(error) => Some(error.severity()),
            _ => None,
        }
    }
}
