//! Client configuration structures and loaders.

use std::env;
use std::path::PathBuf;

use planner_runtime::RuntimeConfig;
use strum::{Display, EnumString};

/// How the shortage report is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Explicit log directory; implies file logging.
    pub dir: Option<PathBuf>,
    /// Log to the platform cache directory when no explicit directory is set.
    pub to_file: bool,
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    pub report_format: ReportFormat,
    pub logging: LogConfig,
    pub runtime: RuntimeConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            report_format: ReportFormat::default(),
            logging: LogConfig::default(),
            runtime: RuntimeConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `PLANNER_DATA_DIR` - Directory holding config, tables, catalog and roster (default: `data`)
    /// - `PLANNER_REPORT_FORMAT` - `text` or `json` (default: text)
    /// - `PLANNER_LOG_DIR` - Write logs to this directory instead of stderr
    /// - `PLANNER_LOG_TO_FILE` - Write logs to the platform cache directory (default: false)
    /// - `RECOMPUTE_COOLDOWN_MS`, `PLANNER_COMMAND_BUFFER`, `PLANNER_EVENT_BUFFER` - see [`RuntimeConfig::from_env`]
    pub fn from_env() -> Self {
        Self {
            runtime: RuntimeConfig::from_env(),
            ..Self::from_vars(|key| env::var(key).ok())
        }
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = var("PLANNER_DATA_DIR").filter(|dir| !dir.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(format) = var("PLANNER_REPORT_FORMAT").and_then(|value| value.parse().ok()) {
            config.report_format = format;
        }
        if let Some(dir) = var("PLANNER_LOG_DIR").filter(|dir| !dir.is_empty()) {
            config.logging.dir = Some(PathBuf::from(dir));
        }
        if let Some(to_file) = var("PLANNER_LOG_TO_FILE").as_deref().and_then(parse_bool) {
            config.logging.to_file = to_file;
        }

        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use std::time::Duration;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ClientConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config(&[]);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.report_format, ReportFormat::Text);
        assert_eq!(config.logging, LogConfig::default());
        assert_eq!(config.runtime.recompute_cooldown, Duration::from_millis(1_000));
    }

    #[test]
    fn variables_override_defaults() {
        let config = config(&[
            ("PLANNER_DATA_DIR", "/srv/planner"),
            ("PLANNER_REPORT_FORMAT", "JSON"),
            ("PLANNER_LOG_DIR", "/var/log/planner"),
            ("PLANNER_LOG_TO_FILE", "yes"),
        ]);
        assert_eq!(config.data_dir, PathBuf::from("/srv/planner"));
        assert_eq!(config.report_format, ReportFormat::Json);
        assert_eq!(config.logging.dir, Some(PathBuf::from("/var/log/planner")));
        assert!(config.logging.to_file);
    }

    #[test]
    fn malformed_values_are_ignored() {
        let config = config(&[
            ("PLANNER_REPORT_FORMAT", "yaml"),
            ("PLANNER_LOG_TO_FILE", "maybe"),
            ("PLANNER_DATA_DIR", ""),
        ]);
        assert_eq!(config.report_format, ReportFormat::Text);
        assert!(!config.logging.to_file);
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }
}
