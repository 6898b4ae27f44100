//! Census CLI - browse a public user directory from your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

mod commands;
mod output;

use commands::{browse, cities, demo, list, logs, status};

/// Census - a public user directory in your terminal
#[derive(Parser)]
#[command(name = "cs", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List users from the directory
    List {
        /// Name search term (matches first or last name, case-insensitive)
        #[arg(long)]
        search: Option<String>,
        /// Keep only users from this city (exact match)
        #[arg(long)]
        city: Option<String>,
        /// Mark the oldest user in each city
        #[arg(long)]
        highlight_oldest: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the cities present in the directory
    Cities {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show directory status and summary
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Browse the directory interactively
    Browse,

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },

    /// View and manage application logs
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // {:#} keeps the whole context chain on one line
            eprintln!("{}", format!("{:#}", e).red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List { search, city, highlight_oldest, json } => {
            list::run(search, city, highlight_oldest, json)
        }
        Commands::Cities { json } => cities::run(json),
        Commands::Status { json } => status::run(json),
        Commands::Browse => browse::run(),
        Commands::Demo { command } => demo::run(command),
        Commands::Logs { command } => logs::run(command),
    }
}
