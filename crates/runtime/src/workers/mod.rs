//! Worker tasks that back the runtime orchestration.
//!
//! The planner worker owns the roster and the latest report; every handle
//! command is processed there, one at a time.

mod planner;

pub use planner::{Command, PlannerWorker};
