//! Tracing subscriber setup.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LogConfig;

/// Installs the global subscriber.
///
/// `RUST_LOG` overrides the default `info` filter. Logs go to
/// `<dir>/planner.log` when file logging is configured, otherwise to stderr.
pub fn setup_logging(config: &LogConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Some(log_dir) = log_directory(config) else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
        return Ok(());
    };

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "planner.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false),
        )
        .init();

    // Keep the background writer alive for the rest of the process.
    std::mem::forget(guard);

    tracing::info!("Log file: {}/planner.log", log_dir.display());
    Ok(())
}

/// Explicit directory first, then the platform cache directory when enabled.
fn log_directory(config: &LogConfig) -> Option<PathBuf> {
    if let Some(dir) = &config.dir {
        return Some(dir.clone());
    }
    if !config.to_file {
        return None;
    }

    let base_dir = directories::ProjectDirs::from("", "", "planner")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("planner"));
    Some(base_dir.join("logs"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stderr_unless_file_logging_requested() {
        assert_eq!(log_directory(&LogConfig::default()), None);

        let explicit = LogConfig {
            dir: Some(PathBuf::from("/tmp/planner-logs")),
            to_file: false,
        };
        assert_eq!(log_directory(&explicit), Some(PathBuf::from("/tmp/planner-logs")));

        let platform = LogConfig {
            dir: None,
            to_file: true,
        };
        assert!(log_directory(&platform).is_some_and(|dir| dir.ends_with("logs")));
    }
}
