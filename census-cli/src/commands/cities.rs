//! Cities command - list the distinct cities in the directory

use anyhow::Result;

use super::{get_context, get_logger, load_roster};

pub fn run(json: bool) -> Result<()> {
    let logger = get_logger();
    let ctx = get_context()?;
    load_roster(&ctx, &logger)?;

    let cities = ctx.roster_service.cities()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&cities)?);
        return Ok(());
    }

    if cities.is_empty() {
        println!("No cities found.");
        return Ok(());
    }

    for city in &cities {
        println!("{}", city);
    }

    Ok(())
}
