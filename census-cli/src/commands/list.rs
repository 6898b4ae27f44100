//! List command - show users from the directory

use anyhow::Result;

use super::{get_context, get_logger, load_roster};
use crate::output;
use census_core::DirectoryFilter;

pub fn run(
    search: Option<String>,
    city: Option<String>,
    highlight_oldest: bool,
    json: bool,
) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;
    load_roster(&ctx, &logger)?;

    let filter = DirectoryFilter {
        search: search.unwrap_or_default(),
        city,
        highlight_oldest,
    };
    let users = ctx.roster_service.display(&filter)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&users)?);
        return Ok(());
    }

    for warning in ctx.roster_service.warnings()? {
        output::warning(&warning);
    }

    println!("{}", output::user_table(&users));
    println!();
    println!("{} user(s)", users.len());

    Ok(())
}
