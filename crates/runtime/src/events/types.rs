use std::sync::Arc;

use serde::{Deserialize, Serialize};

use planner_core::{AggregateReport, EntityId, MaterialId};

use super::Topic;

/// An aggregation result tagged with the pass that produced it.
///
/// Revisions start at 1 with the pass that runs when the worker starts.
#[derive(Clone, Debug, Default)]
pub struct ReportSnapshot {
    pub revision: u64,
    pub report: Arc<AggregateReport>,
}

impl ReportSnapshot {
    pub fn new(revision: u64, report: AggregateReport) -> Self {
        Self {
            revision,
            report: Arc::new(report),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RosterChange {
    Updated,
    Removed,
}

#[derive(Clone, Debug)]
pub enum PlannerEvent {
    /// A pass completed.
    ReportUpdated(ReportSnapshot),
    /// An entity was added, edited or removed.
    RosterChanged { entity: EntityId, change: RosterChange },
    /// The owned quantity of a material changed.
    InventoryChanged { material: MaterialId, quantity: u64 },
}

impl PlannerEvent {
    pub fn topic(&self) -> Topic {
        match self {
            PlannerEvent::ReportUpdated(_) => Topic::Report,
            PlannerEvent::RosterChanged { .. } => Topic::Roster,
            PlannerEvent::InventoryChanged { .. } => Topic::Inventory,
        }
    }
}
