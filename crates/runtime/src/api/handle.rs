//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! editing the roster, reading the latest report and streaming events.
use tokio::sync::{broadcast, mpsc, oneshot};

use planner_core::{
    Axis, ConsolidatedEntry, Contribution, CreditsSummary, EntityId, EntityProgress,
    EquipmentCategory, MaterialId, PotentialType, ProgressionRange, RosterEntry, SkillType,
};

use super::errors::{Result, RuntimeError};
use crate::events::{EventBus, PlannerEvent, ReportSnapshot, Topic};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Sends a command built around a fresh reply channel and waits for the reply.
    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Replace an entity's whole progression state.
    ///
    /// Every range is validated first; a rejected update changes nothing.
    pub async fn update_progress(&self, entity: EntityId, progress: EntityProgress) -> Result<()> {
        self.request(|reply| Command::UpdateProgress {
            entity,
            progress: Box::new(progress),
            reply,
        })
        .await?
    }

    pub async fn set_range(
        &self,
        entity: EntityId,
        axis: Axis,
        range: ProgressionRange,
    ) -> Result<()> {
        self.request(|reply| Command::SetRange {
            entity,
            axis,
            range,
            reply,
        })
        .await?
    }

    pub async fn set_character_range(&self, entity: EntityId, range: ProgressionRange) -> Result<()> {
        self.set_range(entity, Axis::Level, range).await
    }

    pub async fn set_skill_range(
        &self,
        entity: EntityId,
        skill: SkillType,
        range: ProgressionRange,
    ) -> Result<()> {
        self.set_range(entity, Axis::Skill(skill), range).await
    }

    pub async fn set_potential_range(
        &self,
        entity: EntityId,
        potential: PotentialType,
        range: ProgressionRange,
    ) -> Result<()> {
        self.set_range(entity, Axis::Potential(potential), range).await
    }

    pub async fn set_equipment_range(
        &self,
        entity: EntityId,
        category: EquipmentCategory,
        range: ProgressionRange,
    ) -> Result<()> {
        self.set_range(entity, Axis::Equipment(category), range).await
    }

    /// Add an entity to the roster, or replace it.
    pub async fn upsert_entity(&self, entry: RosterEntry) -> Result<()> {
        self.request(|reply| Command::UpsertEntity {
            entry: Box::new(entry),
            reply,
        })
        .await?
    }

    /// Remove an entity, returning its last state.
    pub async fn remove_entity(&self, entity: EntityId) -> Result<RosterEntry> {
        self.request(|reply| Command::RemoveEntity { entity, reply })
            .await?
    }

    /// "Max all skills" toggle. Recomputes immediately.
    pub async fn toggle_max_skills(&self, entity: EntityId, checked: bool) -> Result<()> {
        self.request(|reply| Command::ToggleMaxSkills {
            entity,
            checked,
            reply,
        })
        .await?
    }

    /// "Max target skills" toggle. Recomputes immediately.
    pub async fn toggle_max_target_skills(&self, entity: EntityId, checked: bool) -> Result<()> {
        self.request(|reply| Command::ToggleMaxTargetSkills {
            entity,
            checked,
            reply,
        })
        .await?
    }

    /// Record how many units of `material` the user owns.
    pub async fn set_owned_quantity(&self, material: MaterialId, quantity: u64) -> Result<()> {
        self.request(|reply| Command::SetOwnedQuantity {
            material,
            quantity,
            reply,
        })
        .await?
    }

    /// Ask for an aggregation pass.
    ///
    /// A coalesced request may be deferred to the end of the cooldown window;
    /// an urgent one runs before this returns.
    pub async fn request_recompute(&self, urgent: bool) -> Result<()> {
        self.request(|reply| Command::RequestRecompute { urgent, reply })
            .await
    }

    /// Latest completed report.
    pub async fn report(&self) -> Result<ReportSnapshot> {
        self.request(|reply| Command::QueryReport { reply }).await
    }

    pub async fn entity(&self, entity: EntityId) -> Result<Option<RosterEntry>> {
        self.request(|reply| Command::QueryEntity { entity, reply })
            .await
    }

    /// Consolidated requirements of a single entity, computed on demand.
    pub async fn entity_requirements(&self, entity: EntityId) -> Result<Vec<ConsolidatedEntry>> {
        self.request(|reply| Command::EntityRequirements { entity, reply })
            .await?
    }

    /// Attribution rows for one material from the latest report.
    pub async fn usage_for(&self, material: MaterialId) -> Result<Vec<Contribution>> {
        let snapshot = self.report().await?;
        Ok(snapshot.report.attribution.usage_for(material).to_vec())
    }

    /// Currency demand from the latest report.
    pub async fn credits(&self) -> Result<CreditsSummary> {
        let snapshot = self.report().await?;
        Ok(snapshot.report.credits.clone())
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut reports = handle.subscribe(Topic::Report);
    /// while let Ok(PlannerEvent::ReportUpdated(snapshot)) = reports.recv().await {
    ///     println!("revision {}", snapshot.revision);
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<PlannerEvent> {
        self.event_bus.subscribe(topic)
    }

    /// Stop the worker. Later calls on any handle fail with
    /// [`RuntimeError::CommandChannelClosed`].
    pub async fn shutdown(&self) -> Result<()> {
        self.request(|reply| Command::Shutdown { reply }).await
    }
}
