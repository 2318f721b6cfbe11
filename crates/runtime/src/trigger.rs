//! Coalescing recompute trigger.
//!
//! Edits request a recompute. A request outside the cooldown window of the
//! last pass runs at once; a request inside it is deferred to the end of the
//! window, and further requests inside the same window collapse into that one
//! deferred pass. Urgent requests always run at once and drop whatever was
//! pending.

use std::time::Duration;

use tokio::time::Instant;

/// What the caller should do with a recompute request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerDecision {
    /// Run the pass now, then call [`RecomputeTrigger::mark_ran`].
    RunNow,
    /// A single pass is scheduled for this instant.
    Deferred(Instant),
}

#[derive(Clone, Debug)]
pub struct RecomputeTrigger {
    cooldown: Duration,
    last_run: Option<Instant>,
    pending: Option<Instant>,
}

impl RecomputeTrigger {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_run: None,
            pending: None,
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Coalescing request.
    pub fn request(&mut self, now: Instant) -> TriggerDecision {
        match self.last_run {
            Some(last) if now.saturating_duration_since(last) < self.cooldown => {
                let deadline = last + self.cooldown;
                if self.pending.replace(deadline).is_some() {
                    tracing::trace!("replacing pending recompute");
                }
                TriggerDecision::Deferred(deadline)
            }
            _ => {
                self.pending = None;
                TriggerDecision::RunNow
            }
        }
    }

    /// Urgent request: bypasses the window and cancels any pending pass.
    pub fn request_immediate(&mut self) -> TriggerDecision {
        self.pending = None;
        TriggerDecision::RunNow
    }

    /// Records a completed pass, restarting the cooldown clock.
    pub fn mark_ran(&mut self, now: Instant) {
        self.last_run = Some(now);
        self.pending = None;
    }

    /// Deadline of the pending pass, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending
    }

    /// Returns true (and clears it) when the pending pass is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(deadline) if deadline <= now => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for RecomputeTrigger {
    fn default() -> Self {
        Self::new(crate::RuntimeConfig::DEFAULT_RECOMPUTE_COOLDOWN)
    }
}
