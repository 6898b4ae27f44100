//! Browse command - interactive directory session
//!
//! Lines that start with ':' are commands and apply immediately; anything
//! else is search input and goes through the debouncer, so the list only
//! re-renders once typing has settled.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{get_context, get_logger, load_roster, log_event};
use crate::output;
use census_core::services::debounce::Debouncer;
use census_core::{CensusContext, DirectoryFilter, LogEvent};

enum Action {
    Quit,
    Rerender,
    Pending,
}

pub fn run() -> Result<()> {
    if atty::isnt(atty::Stream::Stdin) {
        anyhow::bail!("browse requires an interactive terminal");
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async {
        let ctx = tokio::task::spawn_blocking(|| -> Result<CensusContext> {
            let logger = get_logger();
            log_event(&logger, LogEvent::new("browse_started"));
            let ctx = get_context()?;
            load_roster(&ctx, &logger)?;
            Ok(ctx)
        })
        .await??;

        browse_loop(&ctx).await
    });

    // The stdin reader blocks on its worker thread; don't wait for it
    runtime.shutdown_background();

    result
}

async fn browse_loop(ctx: &CensusContext) -> Result<()> {
    let debouncer = Debouncer::new(Duration::from_millis(ctx.config.debounce_ms));
    let mut committed = debouncer.subscribe();

    let mut filter = DirectoryFilter::new().with_highlight();

    render(ctx, &filter)?;
    output::info("Type to search by name. Commands: :city <name>, :city, :highlight, :quit");
    prompt();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match handle_line(line.trim(), &mut filter, &debouncer) {
                    Action::Quit => break,
                    Action::Rerender => {
                        render(ctx, &filter)?;
                        prompt();
                    }
                    Action::Pending => prompt(),
                }
            }
            changed = committed.changed() => {
                if changed.is_err() {
                    break;
                }
                filter.search = committed.borrow_and_update().clone();
                render(ctx, &filter)?;
                prompt();
            }
        }
    }

    Ok(())
}

/// Interpret one input line
///
/// Commands take effect immediately; search input is only forwarded to the
/// debouncer and takes effect when it commits.
fn handle_line(line: &str, filter: &mut DirectoryFilter, debouncer: &Debouncer) -> Action {
    match line {
        ":quit" | ":q" => return Action::Quit,
        ":highlight" => {
            filter.highlight_oldest = !filter.highlight_oldest;
            return Action::Rerender;
        }
        ":city" => {
            filter.city = None;
            return Action::Rerender;
        }
        _ => {}
    }

    if let Some(city) = line.strip_prefix(":city ") {
        filter.city = Some(city.trim().to_string());
        return Action::Rerender;
    }

    if line.starts_with(':') {
        output::error(&format!("Unknown command: {}", line));
        return Action::Pending;
    }

    debouncer.update(line);
    Action::Pending
}

fn render(ctx: &CensusContext, filter: &DirectoryFilter) -> Result<()> {
    let users = ctx.roster_service.display(filter)?;

    println!();
    println!("{}", output::user_table(&users));

    let mut state = Vec::new();
    if !filter.search.is_empty() {
        state.push(format!("search: '{}'", filter.search));
    }
    if let Some(city) = &filter.city {
        state.push(format!("city: {}", city));
    }
    state.push(format!(
        "highlight: {}",
        if filter.highlight_oldest { "on" } else { "off" }
    ));

    println!("{} | {} user(s)", state.join(" | ").dimmed(), users.len());
    Ok(())
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
