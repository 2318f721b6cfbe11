//! High-level runtime orchestrator.
//!
//! The runtime owns the planner worker, wires up the command channel and the
//! event bus, and exposes a builder-based API for clients.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use planner_core::Roster;

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::config::RuntimeConfig;
use crate::events::EventBus;
use crate::oracle::OracleManager;
use crate::repository::{InMemoryRosterRepo, RosterRepository};
use crate::trigger::RecomputeTrigger;
use crate::workers::{Command, PlannerWorker};

/// Main runtime that keeps the requirement report up to date
///
/// The runtime owns the worker task; [`RuntimeHandle`] is the cloneable
/// façade clients talk to.
pub struct PlannerRuntime {
    handle: RuntimeHandle,
    worker_handle: JoinHandle<()>,
}

impl PlannerRuntime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Stop the worker and wait for it to finish.
    pub async fn shutdown(self) -> Result<()> {
        if let Err(error) = self.handle.shutdown().await {
            // The worker may already be gone if a client shut it down.
            tracing::debug!(%error, "shutdown command not delivered");
        }

        self.worker_handle.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`PlannerRuntime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    oracles: Option<OracleManager>,
    repository: Option<Arc<dyn RosterRepository>>,
    roster: Option<Roster>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            oracles: None,
            repository: None,
            roster: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set required oracle manager
    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    /// Set the roster repository. Defaults to an empty in-memory repository.
    pub fn repository(mut self, repository: Arc<dyn RosterRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Start from this roster instead of loading one from the repository.
    ///
    /// The roster is saved to the repository on build.
    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = Some(roster);
        self
    }

    /// Build the runtime and spawn the planner worker.
    ///
    /// The worker runs its first aggregation pass right away.
    pub async fn build(self) -> Result<PlannerRuntime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let repository = self
            .repository
            .unwrap_or_else(|| Arc::new(InMemoryRosterRepo::new()));

        let roster = match self.roster {
            Some(roster) => {
                if let Err(error) = repository.save(&roster) {
                    warn!(%error, "failed to persist initial roster");
                }
                roster
            }
            None => repository.load().unwrap_or_else(|error| {
                warn!(%error, "failed to load roster; starting empty");
                Roster::new()
            }),
        };

        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let worker = PlannerWorker::new(
            roster,
            oracles,
            repository,
            RecomputeTrigger::new(self.config.recompute_cooldown),
            command_rx,
            event_bus,
        );
        let worker_handle = tokio::spawn(worker.run());

        Ok(PlannerRuntime {
            handle,
            worker_handle,
        })
    }
}
