//! Logs command - view and manage the activity log

use anyhow::Result;
use chrono::Utc;
use clap::Subcommand;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use super::get_census_dir;
use census_core::{LogEntry, LoggingService};

#[derive(Subcommand)]
pub enum LogsCommands {
    /// Show recent log entries
    List {
        /// Number of entries to show
        #[arg(short, long, default_value = "50")]
        limit: usize,
        /// Show only errors
        #[arg(long)]
        errors: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear old log entries
    Clear {
        /// Delete logs older than N days
        #[arg(long, default_value = "30")]
        older_than_days: u64,
        /// Skip confirmation prompt
        #[arg(long, short = 'f')]
        force: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show log statistics and file path
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// JSON output structure for log statistics
#[derive(Serialize)]
struct LogStats {
    total_entries: u64,
    error_count: usize,
    log_path: String,
    log_size_bytes: u64,
}

fn get_logging_service() -> Result<LoggingService> {
    let census_dir = get_census_dir();
    std::fs::create_dir_all(&census_dir)?;
    Ok(LoggingService::new(&census_dir, env!("CARGO_PKG_VERSION"))?)
}

fn format_timestamp(timestamp_ms: i64) -> String {
    use chrono::TimeZone;
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

fn entries_table(entries: &[LogEntry]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Time", "Event", "Command", "Source", "Error"]);

    for entry in entries {
        let error_indicator = if entry.error_message.is_some() {
            "!".red().to_string()
        } else {
            String::new()
        };

        table.add_row(vec![
            format_timestamp(entry.timestamp),
            entry.event.clone(),
            entry.command.clone().unwrap_or_default(),
            entry.source.clone().unwrap_or_default(),
            error_indicator,
        ]);
    }

    table
}

fn list(limit: usize, errors: bool, json: bool) -> Result<()> {
    let service = get_logging_service()?;
    let entries = if errors {
        service.get_errors(limit)?
    } else {
        service.get_recent(limit)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No log entries found.");
        return Ok(());
    }

    println!("{}", entries_table(&entries));

    // Tail the listing with recent failures unless they were the listing
    if !errors {
        let failures = service.get_errors(3)?;
        if !failures.is_empty() {
            println!();
            println!("{}", "Recent Errors:".red().bold());
            for err in &failures {
                println!(
                    "  {} [{}]: {}",
                    format_timestamp(err.timestamp).dimmed(),
                    err.event,
                    err.error_message.as_deref().unwrap_or("Unknown error")
                );
            }
        }
    }

    Ok(())
}

fn clear(older_than_days: u64, force: bool, json: bool) -> Result<()> {
    let cutoff_ms = Utc::now().timestamp_millis() - older_than_days as i64 * 86_400_000;

    if !force && !json {
        use dialoguer::Confirm;
        let prompt = format!("Delete logs older than {} days?", older_than_days);
        if !Confirm::new().with_prompt(prompt).default(false).interact()? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let service = get_logging_service()?;
    let deleted = service.delete_before(cutoff_ms)?;

    if json {
        println!("{}", serde_json::json!({"deleted": deleted}));
    } else {
        println!("Deleted {} log entries", deleted);
    }

    Ok(())
}

fn stats(json: bool) -> Result<()> {
    let service = get_logging_service()?;
    let total = service.count()?;
    let errors = service.get_errors(1000)?.len();
    let log_path = service.log_path();
    let size_bytes = std::fs::metadata(log_path).map(|m| m.len()).unwrap_or(0);

    if json {
        let stats = LogStats {
            total_entries: total,
            error_count: errors,
            log_path: log_path.to_string_lossy().into_owned(),
            log_size_bytes: size_bytes,
        };
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Log Statistics".bold());
    println!("  Total entries: {}", total);
    println!("  Errors: {}", errors);
    println!("  File: {}", log_path.display());
    println!("  Size: {} bytes", size_bytes);

    Ok(())
}

pub fn run(command: LogsCommands) -> Result<()> {
    match command {
        LogsCommands::List { limit, errors, json } => list(limit, errors, json),
        LogsCommands::Clear {
            older_than_days,
            force,
            json,
        } => clear(older_than_days, force, json),
        LogsCommands::Stats { json } => stats(json),
    }
}
