//! CLI command implementations

pub mod browse;
pub mod cities;
pub mod demo;
pub mod list;
pub mod logs;
pub mod status;

use std::path::PathBuf;
use anyhow::{Context, Result};
use census_core::{CensusContext, LogEvent, LoggingService};

use crate::output;

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let census_dir = get_census_dir();
    // Ensure directory exists
    std::fs::create_dir_all(&census_dir).ok()?;
    LoggingService::new(&census_dir, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the census directory from environment or default
pub fn get_census_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CENSUS_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".census")
    }
}

/// Get or create census context
pub fn get_context() -> Result<CensusContext> {
    let census_dir = get_census_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(&census_dir)
        .with_context(|| format!("Failed to create census directory: {:?}", census_dir))?;

    CensusContext::new(&census_dir).context("Failed to initialize census context")
}

/// Load the roster behind a spinner, logging the outcome
pub fn load_roster(ctx: &CensusContext, logger: &Option<LoggingService>) -> Result<()> {
    let spinner = output::fetch_spinner(ctx.provider.name());
    let result = ctx.roster_service.load();
    spinner.finish_and_clear();

    match &result {
        Ok(()) => {
            // Skipped-record notes carry ids only, never names
            let mut event = LogEvent::new("fetch_completed").with_source(ctx.provider.name());
            if let Ok(warnings) = ctx.roster_service.warnings() {
                if !warnings.is_empty() {
                    event = event.with_error_details(warnings.join("; "));
                }
            }
            log_event(logger, event);
        }
        Err(e) => {
            log_event(
                logger,
                LogEvent::new("fetch_failed")
                    .with_source(ctx.provider.name())
                    .with_error(e.to_string()),
            );
        }
    }

    result
}
