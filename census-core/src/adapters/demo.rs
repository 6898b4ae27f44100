//! Demo data provider for offline use and testing
//!
//! Serves a small fixed roster mirroring the shape of the real endpoint:
//! four cities, one clear oldest resident in three of them, and one city
//! with a shared earliest birth date so tie behavior is observable.

use chrono::NaiveDate;

use crate::domain::User;

fn birthday(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Generate the demo roster
///
/// Record order is part of the fixture: Denver's two 1985-05-05 residents
/// (Susan before Frank) pin down first-occurrence tie handling, and city
/// first appearances run Phoenix, Denver, Austin, Seattle.
pub fn generate_demo_users() -> Vec<User> {
    vec![
        User::new(1, "Margaret", "Hale", birthday(1948, 3, 17), "Phoenix"),
        User::new(2, "Daniel", "Ortiz", birthday(1990, 11, 2), "Denver"),
        User::new(3, "Susan", "Brennan", birthday(1985, 5, 5), "Denver"),
        User::new(4, "Frank", "Delgado", birthday(1985, 5, 5), "Denver"),
        User::new(5, "Peter", "Lang", birthday(1972, 8, 9), "Phoenix"),
        User::new(6, "Felix", "Navarro", birthday(1958, 1, 5), "Austin"),
        User::new(7, "Joan", "Whitfield", birthday(1979, 4, 22), "Austin"),
        User::new(8, "June", "Okafor", birthday(1944, 7, 18), "Seattle"),
        User::new(9, "Marcus", "Reed", birthday(1995, 2, 14), "Seattle"),
        User::new(10, "Elena", "Vasquez", birthday(1988, 9, 30), "Seattle"),
        User::new(11, "Tom", "Sandoval", birthday(1996, 5, 30), "Phoenix"),
        User::new(12, "Alice", "Munroe", birthday(1993, 12, 1), "Denver"),
        User::new(13, "Henry", "Blackwood", birthday(1961, 6, 27), "Austin"),
    ]
}

// =============================================================================
// DemoDirectoryProvider - implements DirectoryProvider trait
// =============================================================================

use crate::domain::result::Result;
use crate::ports::{DirectoryProvider, FetchUsersResult};

/// Demo directory provider
///
/// Implements the DirectoryProvider trait over the built-in roster, so the
/// tool works without network access.
pub struct DemoDirectoryProvider;

impl DemoDirectoryProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DemoDirectoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryProvider for DemoDirectoryProvider {
    fn name(&self) -> &str {
        "demo"
    }

    fn fetch_users(&self) -> Result<FetchUsersResult> {
        Ok(FetchUsersResult {
            users: generate_demo_users(),
            warnings: Vec::new(),
        })
    }
}
