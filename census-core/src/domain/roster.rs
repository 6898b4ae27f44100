//! Roster - the full user collection held after a load

use serde::Serialize;

use super::User;

/// The complete, unfiltered user collection
///
/// Fetched once per process and never mutated afterwards. Every display
/// list is derived from it; warnings carry the records the adapter skipped
/// as malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Roster {
    pub users: Vec<User>,
    /// Provider the users came from (e.g., "dummyjson", "demo")
    pub source: String,
    pub warnings: Vec<String>,
}

impl Roster {
    pub fn new(users: Vec<User>, source: impl Into<String>) -> Self {
        Self {
            users,
            source: source.into(),
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_roster_carries_warnings() {
        let user = User::new(
            1,
            "Anna",
            "Lee",
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            "Berlin",
        );
        let roster = Roster::new(vec![user], "dummyjson")
            .with_warnings(vec!["Skipping user 9: missing city".to_string()]);

        assert_eq!(roster.len(), 1);
        assert_eq!(roster.source, "dummyjson");
        assert_eq!(roster.warnings.len(), 1);
    }
}
