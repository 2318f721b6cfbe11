//! Planner event broadcasting.
//!
//! The worker publishes an event after every accepted edit and every completed
//! aggregation pass. Delivery is best-effort; a lagging subscriber misses
//! intermediate reports but can always ask the handle for the latest one.
mod bus;
mod types;

pub use bus::{EventBus, Topic};
pub use types::{PlannerEvent, ReportSnapshot, RosterChange};
