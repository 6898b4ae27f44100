//! Status command - show directory status and summary

use anyhow::Result;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::{get_context, get_logger, load_roster};

pub fn run(json: bool) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;
    load_roster(&ctx, &logger)?;

    let status = ctx.status_service.get_status()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "User Directory Status".bold());
    println!();

    // Summary table (vertical key-value pairs)
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec!["Source", &status.source]);
    table.add_row(vec!["Users", &status.total_users.to_string()]);
    table.add_row(vec!["Cities", &status.total_cities.to_string()]);
    table.add_row(vec!["Demo mode", if status.demo_mode { "on" } else { "off" }]);

    println!("{}", table);
    println!();

    // Print birth date range
    if let (Some(earliest), Some(latest)) =
        (&status.birth_date_range.earliest, &status.birth_date_range.latest)
    {
        println!("Birth dates: {} to {}", earliest, latest);
        println!();
    }

    // Print the city list
    if !status.cities.is_empty() {
        println!("{}", "Cities".bold());
        for city in &status.cities {
            println!("  • {}", city);
        }
    }

    if !status.warnings.is_empty() {
        println!();
        println!("{}", "Warnings".yellow().bold());
        for warning in &status.warnings {
            println!("  {}", warning);
        }
    }

    Ok(())
}
