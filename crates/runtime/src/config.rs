//! Runtime configuration structures and loaders.
use std::env;
use std::time::Duration;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Minimum spacing between two coalesced aggregation passes.
    pub recompute_cooldown: Duration,
    pub command_buffer_size: usize,
    pub event_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_RECOMPUTE_COOLDOWN: Duration = Duration::from_millis(1_000);

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RECOMPUTE_COOLDOWN_MS` - Coalescing window in milliseconds (default: 1000)
    /// - `PLANNER_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `PLANNER_EVENT_BUFFER` - Event channel capacity (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(millis) = read_env::<u64>("RECOMPUTE_COOLDOWN_MS") {
            config.recompute_cooldown = Duration::from_millis(millis);
        }
        if let Some(capacity) = read_env::<usize>("PLANNER_COMMAND_BUFFER") {
            config.command_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("PLANNER_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        config
    }

    pub fn with_recompute_cooldown(mut self, cooldown: Duration) -> Self {
        self.recompute_cooldown = cooldown;
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            recompute_cooldown: Self::DEFAULT_RECOMPUTE_COOLDOWN,
            command_buffer_size: 32,
            event_buffer_size: 100,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
