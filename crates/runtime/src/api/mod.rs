//! Public API surface for runtime consumers.
//!
//! Re-exports the handle and error types used by clients.
mod errors;
mod handle;

pub use errors::{RepositoryError, Result, RuntimeError};
pub use handle::RuntimeHandle;
