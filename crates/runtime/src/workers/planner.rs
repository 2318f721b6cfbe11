//! Planner worker that owns the authoritative [`Roster`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), applies
//! edits, asks the [`RecomputeTrigger`] when to aggregate, and publishes the
//! results on the [`EventBus`].

use std::ops::ControlFlow;
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, trace, warn};

use planner_core::{
    Axis, ConsolidatedEntry, EntityId, EntityProgress, MaterialId, ProgressError,
    ProgressionRange, Roster, RosterEntry, aggregate, entity_summary,
};

use crate::api::Result;
use crate::events::{EventBus, PlannerEvent, ReportSnapshot, RosterChange};
use crate::oracle::OracleManager;
use crate::repository::RosterRepository;
use crate::trigger::{RecomputeTrigger, TriggerDecision};

/// Commands that can be sent to the planner worker
pub enum Command {
    /// Replace an entity's whole progression state.
    UpdateProgress {
        entity: EntityId,
        progress: Box<EntityProgress>,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Change one axis range.
    SetRange {
        entity: EntityId,
        axis: Axis,
        range: ProgressionRange,
        reply: oneshot::Sender<Result<()>>,
    },
    UpsertEntity {
        entry: Box<RosterEntry>,
        reply: oneshot::Sender<Result<()>>,
    },
    RemoveEntity {
        entity: EntityId,
        reply: oneshot::Sender<Result<RosterEntry>>,
    },
    /// Bulk skill toggle; recomputes immediately.
    ToggleMaxSkills {
        entity: EntityId,
        checked: bool,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Bulk skill target toggle; recomputes immediately.
    ToggleMaxTargetSkills {
        entity: EntityId,
        checked: bool,
        reply: oneshot::Sender<Result<()>>,
    },
    SetOwnedQuantity {
        material: MaterialId,
        quantity: u64,
        reply: oneshot::Sender<Result<()>>,
    },
    RequestRecompute {
        urgent: bool,
        reply: oneshot::Sender<()>,
    },
    QueryReport {
        reply: oneshot::Sender<ReportSnapshot>,
    },
    QueryEntity {
        entity: EntityId,
        reply: oneshot::Sender<Option<RosterEntry>>,
    },
    EntityRequirements {
        entity: EntityId,
        reply: oneshot::Sender<Result<Vec<ConsolidatedEntry>>>,
    },
    Shutdown {
        reply: oneshot::Sender<()>,
    },
}

/// Background task that processes planner commands.
pub struct PlannerWorker {
    roster: Roster,
    oracles: OracleManager,
    repository: Arc<dyn RosterRepository>,
    trigger: RecomputeTrigger,
    snapshot: ReportSnapshot,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl PlannerWorker {
    pub fn new(
        roster: Roster,
        oracles: OracleManager,
        repository: Arc<dyn RosterRepository>,
        trigger: RecomputeTrigger,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            entities = roster.len(),
            cooldown_ms = trigger.cooldown().as_millis() as u64,
            "PlannerWorker initialized"
        );

        Self {
            roster,
            oracles,
            repository,
            trigger,
            snapshot: ReportSnapshot::default(),
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop.
    ///
    /// Runs one pass up front, then serves commands until shutdown or until
    /// every handle is dropped. A deferred pass fires when its deadline
    /// passes while the worker is idle.
    pub async fn run(mut self) {
        self.recompute();

        loop {
            let deadline = self.trigger.deadline();
            tokio::select! {
                command = self.command_rx.recv() => match command {
                    Some(command) => {
                        if self.handle_command(command).is_break() {
                            break;
                        }
                    }
                    None => break,
                },
                _ = wait_for(deadline) => {
                    if self.trigger.take_due(Instant::now()) {
                        self.recompute();
                    }
                }
            }
        }

        if self.trigger.deadline().is_some() {
            debug!("dropping pending recompute at shutdown");
        }
        info!(revision = self.snapshot.revision, "PlannerWorker stopped");
    }

    fn handle_command(&mut self, command: Command) -> ControlFlow<()> {
        match command {
            Command::UpdateProgress {
                entity,
                progress,
                reply,
            } => {
                let result = self.edit_entity(entity, false, |entry| {
                    progress.validate()?;
                    entry.progress = *progress;
                    Ok(())
                });
                respond(reply, result, "UpdateProgress");
            }
            Command::SetRange {
                entity,
                axis,
                range,
                reply,
            } => {
                let result = self.edit_entity(entity, false, |entry| {
                    entry.progress.set_range(axis, range)
                });
                respond(reply, result, "SetRange");
            }
            Command::UpsertEntity { entry, reply } => {
                let result = self.upsert_entity(*entry);
                respond(reply, result, "UpsertEntity");
            }
            Command::RemoveEntity { entity, reply } => {
                let result = self.remove_entity(entity);
                respond(reply, result, "RemoveEntity");
            }
            Command::ToggleMaxSkills {
                entity,
                checked,
                reply,
            } => {
                let result = self.edit_entity(entity, true, |entry| {
                    entry.progress.max_all_skills(&entry.profile, checked);
                    Ok(())
                });
                respond(reply, result, "ToggleMaxSkills");
            }
            Command::ToggleMaxTargetSkills {
                entity,
                checked,
                reply,
            } => {
                let result = self.edit_entity(entity, true, |entry| {
                    entry.progress.max_target_skills(&entry.profile, checked);
                    Ok(())
                });
                respond(reply, result, "ToggleMaxTargetSkills");
            }
            Command::SetOwnedQuantity {
                material,
                quantity,
                reply,
            } => {
                let result = self.set_owned_quantity(material, quantity);
                respond(reply, result, "SetOwnedQuantity");
            }
            Command::RequestRecompute { urgent, reply } => {
                self.schedule(urgent);
                respond(reply, (), "RequestRecompute");
            }
            Command::QueryReport { reply } => {
                respond(reply, self.snapshot.clone(), "QueryReport");
            }
            Command::QueryEntity { entity, reply } => {
                respond(reply, self.roster.get(entity).cloned(), "QueryEntity");
            }
            Command::EntityRequirements { entity, reply } => {
                let result: Result<Vec<ConsolidatedEntry>> = self
                    .roster
                    .get(entity)
                    .map(|entry| entity_summary(&self.oracles.as_planner_env(), entry))
                    .ok_or_else(|| ProgressError::UnknownEntity(entity).into());
                respond(reply, result, "EntityRequirements");
            }
            Command::Shutdown { reply } => {
                respond(reply, (), "Shutdown");
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }

    /// Applies `edit` to one entity. Rejected edits leave the roster untouched
    /// and do not request a recompute.
    fn edit_entity<F>(&mut self, entity: EntityId, urgent: bool, edit: F) -> Result<()>
    where
        F: FnOnce(&mut RosterEntry) -> std::result::Result<(), ProgressError>,
    {
        let entry = self
            .roster
            .get_mut(entity)
            .ok_or(ProgressError::UnknownEntity(entity))?;
        edit(entry)?;

        self.roster_changed(entity, RosterChange::Updated);
        self.schedule(urgent);
        Ok(())
    }

    fn upsert_entity(&mut self, entry: RosterEntry) -> Result<()> {
        entry.progress.validate()?;
        let entity = entry.id();
        if self.roster.upsert(entry).is_none() {
            debug!(%entity, "entity added to roster");
        }

        self.roster_changed(entity, RosterChange::Updated);
        self.schedule(false);
        Ok(())
    }

    fn remove_entity(&mut self, entity: EntityId) -> Result<RosterEntry> {
        let removed = self
            .roster
            .remove(entity)
            .ok_or(ProgressError::UnknownEntity(entity))?;

        self.roster_changed(entity, RosterChange::Removed);
        self.schedule(false);
        Ok(removed)
    }

    fn set_owned_quantity(&mut self, material: MaterialId, quantity: u64) -> Result<()> {
        self.oracles.set_owned_quantity(material, quantity)?;

        self.event_bus
            .publish(PlannerEvent::InventoryChanged { material, quantity });
        self.schedule(false);
        Ok(())
    }

    /// Persists the roster and announces the change.
    fn roster_changed(&mut self, entity: EntityId, change: RosterChange) {
        if let Err(error) = self.repository.save(&self.roster) {
            warn!(%error, %entity, "failed to persist roster");
        }
        self.event_bus
            .publish(PlannerEvent::RosterChanged { entity, change });
    }

    fn schedule(&mut self, urgent: bool) {
        let decision = if urgent {
            self.trigger.request_immediate()
        } else {
            self.trigger.request(Instant::now())
        };

        match decision {
            TriggerDecision::RunNow => self.recompute(),
            TriggerDecision::Deferred(deadline) => {
                trace!(
                    in_ms = deadline
                        .saturating_duration_since(Instant::now())
                        .as_millis() as u64,
                    "recompute deferred"
                );
            }
        }
    }

    /// Runs one aggregation pass over the current roster and publishes it.
    fn recompute(&mut self) {
        let report = aggregate(&self.oracles.as_planner_env(), &self.roster);
        let revision = self.snapshot.revision + 1;

        debug!(
            revision,
            entities = self.roster.len(),
            shortages = report.shortages.len(),
            "report updated"
        );

        self.snapshot = ReportSnapshot::new(revision, report);
        self.trigger.mark_ran(Instant::now());
        self.event_bus
            .publish(PlannerEvent::ReportUpdated(self.snapshot.clone()));
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

fn respond<T>(reply: oneshot::Sender<T>, value: T, command: &str) {
    if reply.send(value).is_err() {
        debug!("{} reply channel closed (caller dropped)", command);
    }
}
