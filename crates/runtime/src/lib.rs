//! Runtime orchestration for the roster requirement planner.
//!
//! This crate wires oracle access, the roster repository, the recompute
//! trigger and the planner worker into a cohesive runtime API. Consumers embed
//! [`PlannerRuntime`] and talk to it through the cloneable [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] broadcasts report updates to subscribers
//! - [`trigger`] decides when an aggregation pass runs
//! - [`workers`] keeps background tasks internal to the crate
//! - [`oracle`] and [`repository`] provide data adapters reused by other crates
pub mod api;
pub mod config;
pub mod events;
pub mod oracle;
pub mod repository;
pub mod runtime;
pub mod trigger;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use config::RuntimeConfig;
pub use events::{EventBus, PlannerEvent, ReportSnapshot};
pub use oracle::OracleManager;
pub use repository::{InMemoryRosterRepo, RepositoryError, RosterRepository};
pub use runtime::{PlannerRuntime, RuntimeBuilder};
pub use trigger::{RecomputeTrigger, TriggerDecision};
