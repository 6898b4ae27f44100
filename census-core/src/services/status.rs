//! Status service - roster summary

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use crate::services::filter;
use crate::services::roster::RosterService;

/// Status service for roster summaries
pub struct StatusService {
    roster_service: Arc<RosterService>,
    demo_mode: bool,
}

impl StatusService {
    pub fn new(roster_service: Arc<RosterService>, demo_mode: bool) -> Self {
        Self {
            roster_service,
            demo_mode,
        }
    }

    /// Get overall status summary
    pub fn get_status(&self) -> Result<StatusSummary> {
        let roster = self.roster_service.roster()?;
        let cities = filter::distinct_cities(&roster);

        let earliest = roster.users.iter().map(|u| u.birth_date).min();
        let latest = roster.users.iter().map(|u| u.birth_date).max();

        Ok(StatusSummary {
            source: roster.source.clone(),
            demo_mode: self.demo_mode,
            total_users: roster.users.len() as i64,
            total_cities: cities.len() as i64,
            cities,
            birth_date_range: BirthDateRange {
                earliest: earliest.map(|d| d.to_string()),
                latest: latest.map(|d| d.to_string()),
            },
            warnings: roster.warnings,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StatusSummary {
    pub source: String,
    pub demo_mode: bool,
    pub total_users: i64,
    pub total_cities: i64,
    pub cities: Vec<String>,
    pub birth_date_range: BirthDateRange,
    pub warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BirthDateRange {
    pub earliest: Option<String>,
    pub latest: Option<String>,
}
