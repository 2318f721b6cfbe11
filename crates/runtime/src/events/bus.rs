//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::PlannerEvent;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Completed aggregation passes
    Report,
    /// Roster edits
    Roster,
    /// Owned quantity edits
    Inventory,
}

/// Topic-based event bus
///
/// Consumers subscribe to the topics they care about; every topic has its own
/// bounded broadcast channel.
#[derive(Clone, Debug)]
pub struct EventBus {
    report: broadcast::Sender<PlannerEvent>,
    roster: broadcast::Sender<PlannerEvent>,
    inventory: broadcast::Sender<PlannerEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with the given capacity per topic.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            report: broadcast::channel(capacity).0,
            roster: broadcast::channel(capacity).0,
            inventory: broadcast::channel(capacity).0,
        }
    }

    fn channel(&self, topic: Topic) -> &broadcast::Sender<PlannerEvent> {
        match topic {
            Topic::Report => &self.report,
            Topic::Roster => &self.roster,
            Topic::Inventory => &self.inventory,
        }
    }

    /// Publish an event to its topic. Events without subscribers are dropped.
    pub fn publish(&self, event: PlannerEvent) {
        let topic = event.topic();
        if self.channel(topic).send(event).is_err() {
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<PlannerEvent> {
        self.channel(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
