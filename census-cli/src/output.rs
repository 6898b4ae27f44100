//! Output formatting utilities

use std::time::Duration;

use chrono::Datelike;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};

use census_core::DisplayUser;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Spinner shown while the roster is fetched
pub fn fetch_spinner(source: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(format!("Fetching users from {}...", source));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Format a birth date as M/D/YYYY, unpadded
pub fn format_birthday(date: &chrono::NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Render a display list as a table
///
/// Oldest-per-city rows get a bold yellow name with a trailing marker.
pub fn user_table(users: &[DisplayUser]) -> Table {
    let mut table = create_table();
    table.set_header(vec!["Name", "City", "Birthday"]);

    if users.is_empty() {
        table.add_row(vec!["No matching users", "", ""]);
        return table;
    }

    for display in users {
        let name = if display.is_oldest {
            Cell::new(format!("{} *", display.user.full_name()))
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(display.user.full_name())
        };

        table.add_row(vec![
            name,
            Cell::new(&display.user.city),
            Cell::new(format_birthday(&display.user.birth_date)),
        ]);
    }

    table
}
