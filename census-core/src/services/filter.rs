//! Filter pipeline - pure roster filtering and annotation
//!
//! Everything here is a pure function of (roster, criteria): no I/O, no
//! shared state. The display list is always a subset of the roster in the
//! roster's own order; the pipeline never sorts and never mutates source
//! records.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DisplayUser, Roster, User};

/// Criteria for deriving the display list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryFilter {
    /// Name substring, matched case-insensitively against first or last name
    pub search: String,
    /// Exact city to keep; None keeps all
    pub city: Option<String>,
    /// Annotate the oldest user per city
    pub highlight_oldest: bool,
}

impl DirectoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_highlight(mut self) -> Self {
        self.highlight_oldest = true;
        self
    }
}

/// Apply the full pipeline: name filter, city filter, oldest annotation
///
/// The oldest-per-city map is computed over the ENTIRE roster, never the
/// filtered subset, so toggling filters cannot change which record counts
/// as oldest for a city.
pub fn apply(roster: &Roster, filter: &DirectoryFilter) -> Vec<DisplayUser> {
    // Single normalization point; callers pass the term as typed
    let term = filter.search.to_lowercase();

    let oldest = if filter.highlight_oldest {
        Some(oldest_per_city(roster))
    } else {
        None
    };

    roster
        .users
        .iter()
        .filter(|user| matches_name(user, &term))
        .filter(|user| matches_city(user, filter.city.as_deref()))
        .map(|user| {
            let is_oldest = oldest
                .as_ref()
                .and_then(|m| m.get(&user.city))
                .map_or(false, |id| *id == user.id);
            DisplayUser::new(user.clone(), is_oldest)
        })
        .collect()
}

/// Case-insensitive substring match on first OR last name
///
/// An empty term matches everyone. Only name fields participate; a term
/// that happens to equal a city name has no effect here.
fn matches_name(user: &User, lowercased_term: &str) -> bool {
    user.first_name.to_lowercase().contains(lowercased_term)
        || user.last_name.to_lowercase().contains(lowercased_term)
}

/// Exact city equality; no selection keeps everyone
fn matches_city(user: &User, city: Option<&str>) -> bool {
    city.map_or(true, |c| user.city == c)
}

/// City -> id of that city's earliest-born user
///
/// A left fold with a strict `<` comparison: the first-encountered user
/// keeps the slot on a shared birth date. There is no secondary tie-break.
pub fn oldest_per_city(roster: &Roster) -> HashMap<String, u64> {
    let mut oldest: HashMap<String, (NaiveDate, u64)> = HashMap::new();

    for user in &roster.users {
        let entry = oldest
            .entry(user.city.clone())
            .or_insert((user.birth_date, user.id));
        if user.birth_date < entry.0 {
            *entry = (user.birth_date, user.id);
        }
    }

    oldest
        .into_iter()
        .map(|(city, (_, id))| (city, id))
        .collect()
}

/// Distinct cities in order of first occurrence, never alphabetical
pub fn distinct_cities(roster: &Roster) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut cities = Vec::new();

    for user in &roster.users {
        if seen.insert(user.city.as_str()) {
            cities.push(user.city.clone());
        }
    }

    cities
}
