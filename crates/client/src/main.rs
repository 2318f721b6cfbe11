//! Roster requirement planner binary.
//!
//! Loads configuration from the environment, sets up logging, loads the data
//! directory, runs one aggregation pass through the planner runtime and prints
//! the shortage report.
//!
//! # Examples
//!
//! ```bash
//! PLANNER_DATA_DIR=crates/planner/content/data cargo run -p planner-client
//! PLANNER_REPORT_FORMAT=json cargo run -p planner-client
//! ```
mod config;
mod logging;
mod report;

use std::sync::Arc;

use anyhow::Result;
use planner_content::ContentFactory;
use planner_runtime::{OracleManager, PlannerRuntime};

use crate::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    logging::setup_logging(&config.logging)?;

    tracing::info!("Loading planner data from {}", config.data_dir.display());
    let factory = ContentFactory::new(&config.data_dir);
    let planner_config = factory.load_config()?;
    let tables = factory.load_tables()?;
    let catalog = factory.load_catalog()?;
    let roster = factory.load_roster()?;
    tracing::info!(
        materials = catalog.len(),
        entities = roster.len(),
        "Planner data loaded"
    );

    let oracles = OracleManager::new(Arc::new(catalog), Arc::new(tables), planner_config);
    let runtime = PlannerRuntime::builder()
        .config(config.runtime.clone())
        .oracles(oracles)
        .roster(roster.clone())
        .build()
        .await?;

    let snapshot = runtime.handle().report().await?;
    println!(
        "{}",
        report::render(&snapshot.report, &roster, config.report_format)?
    );

    runtime.shutdown().await?;
    tracing::info!("Planner shutdown complete");
    Ok(())
}
