//! User domain model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single directory entry as supplied by the source
///
/// Records are immutable once fetched; the view layer never mutates or
/// reorders them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    /// Used only for relative ordering (oldest-per-city)
    pub birth_date: NaiveDate,
    pub city: String,
}

impl User {
    pub fn new(
        id: u64,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
        city: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            city: city.into(),
        }
    }

    /// Display name ("First Last")
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A user as it appears in the display list
///
/// Wraps the source record with the derived oldest-per-city annotation.
/// The annotation is recomputed on every filter pass and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayUser {
    #[serde(flatten)]
    pub user: User,
    pub is_oldest: bool,
}

impl DisplayUser {
    pub fn new(user: User, is_oldest: bool) -> Self {
        Self { user, is_oldest }
    }
}
