//! Roster loading lifecycle tests
//!
//! Network I/O is mocked at the trait level with static, failing, and
//! flaky providers. These tests verify the load-state machine, the
//! single-fetch guarantee, and the services layered on top of the roster.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;

use census_core::adapters::demo::DemoDirectoryProvider;
use census_core::domain::result::{Error, Result as CoreResult};
use census_core::domain::User;
use census_core::ports::{DirectoryProvider, FetchUsersResult};
use census_core::services::roster::{LoadState, RosterService};
use census_core::services::{DirectoryFilter, StatusService};

// ============================================================================
// Test Providers
// ============================================================================

/// Serves a fixed set of users, counting fetches
struct StaticProvider {
    users: Vec<User>,
    warnings: Vec<String>,
    calls: AtomicUsize,
}

impl StaticProvider {
    fn new(users: Vec<User>) -> Self {
        Self {
            users,
            warnings: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DirectoryProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch_users(&self) -> CoreResult<FetchUsersResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(FetchUsersResult {
            users: self.users.clone(),
            warnings: self.warnings.clone(),
        })
    }
}

/// Always fails, counting attempts
struct FailingProvider {
    calls: AtomicUsize,
}

impl FailingProvider {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

impl DirectoryProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    fn fetch_users(&self) -> CoreResult<FetchUsersResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(Error::Fetch("connection refused".to_string()))
    }
}

/// Fails the first fetch, succeeds afterwards
struct FlakyProvider {
    users: Vec<User>,
    calls: AtomicUsize,
}

impl FlakyProvider {
    fn new(users: Vec<User>) -> Self {
        Self {
            users,
            calls: AtomicUsize::new(0),
        }
    }
}

impl DirectoryProvider for FlakyProvider {
    fn name(&self) -> &str {
        "flaky"
    }

    fn fetch_users(&self) -> CoreResult<FetchUsersResult> {
        let attempt = self.calls.fetch_add(1, Ordering::SeqCst);
        if attempt == 0 {
            return Err(Error::Fetch("transient outage".to_string()));
        }
        Ok(FetchUsersResult {
            users: self.users.clone(),
            warnings: Vec::new(),
        })
    }
}

fn birthday(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_users() -> Vec<User> {
    vec![
        User::new(1, "Anna", "Lee", birthday(1990, 1, 1), "Berlin"),
        User::new(2, "Bruno", "Kranz", birthday(1962, 9, 9), "Munich"),
        User::new(3, "Carla", "Meier", birthday(1988, 2, 2), "Berlin"),
    ]
}

// ============================================================================
// Load-state Machine
// ============================================================================

#[test]
fn test_load_moves_idle_to_loaded() {
    let provider = Arc::new(StaticProvider::new(sample_users()));
    let service = RosterService::new(Arc::clone(&provider) as Arc<dyn DirectoryProvider>);

    assert_eq!(service.state().unwrap(), LoadState::Idle);

    service.load().unwrap();

    match service.state().unwrap() {
        LoadState::Loaded(roster) => {
            assert_eq!(roster.len(), 3);
            assert_eq!(roster.source, "static");
        }
        other => panic!("expected Loaded, got {:?}", other),
    }
}

#[test]
fn test_loaded_is_terminal_and_skips_further_fetches() {
    let provider = Arc::new(StaticProvider::new(sample_users()));
    let service = RosterService::new(Arc::clone(&provider) as Arc<dyn DirectoryProvider>);

    service.load().unwrap();
    service.load().unwrap();
    service.load().unwrap();

    assert_eq!(provider.call_count(), 1, "roster is fetched once per process");
}

#[test]
fn test_provider_failure_becomes_failed_state_with_message() {
    let provider = Arc::new(FailingProvider::new());
    let service = RosterService::new(Arc::clone(&provider) as Arc<dyn DirectoryProvider>);

    let err = service.load().unwrap_err();
    assert!(err.to_string().contains("connection refused"));

    assert_eq!(
        service.state().unwrap(),
        LoadState::Failed("Fetch error: connection refused".to_string())
    );
}

#[test]
fn test_failed_load_can_be_retried() {
    let provider = Arc::new(FlakyProvider::new(sample_users()));
    let service = RosterService::new(Arc::clone(&provider) as Arc<dyn DirectoryProvider>);

    assert!(service.load().is_err());
    assert!(matches!(service.state().unwrap(), LoadState::Failed(_)));

    service.load().unwrap();
    assert!(matches!(service.state().unwrap(), LoadState::Loaded(_)));
}

#[test]
fn test_accessors_before_load_report_not_loaded() {
    let provider = Arc::new(StaticProvider::new(sample_users()));
    let service = RosterService::new(provider as Arc<dyn DirectoryProvider>);

    assert!(service.roster().unwrap_err().to_string().contains("not loaded"));
    assert!(service.cities().is_err());
    assert!(service.display(&DirectoryFilter::new()).is_err());
    assert!(service.warnings().is_err());
}

// ============================================================================
// Services over the Loaded Roster
// ============================================================================

#[test]
fn test_display_applies_criteria_through_the_service() {
    let provider = Arc::new(StaticProvider::new(sample_users()));
    let service = RosterService::new(provider as Arc<dyn DirectoryProvider>);
    service.load().unwrap();

    let display = service
        .display(&DirectoryFilter::new().with_city("Berlin").with_highlight())
        .unwrap();

    assert_eq!(display.len(), 2);
    // Anna (1990) is not Berlin's oldest; Carla (1988) is
    assert!(!display[0].is_oldest);
    assert!(display[1].is_oldest);
}

#[test]
fn test_cities_come_from_the_loaded_roster_in_order() {
    let provider = Arc::new(StaticProvider::new(sample_users()));
    let service = RosterService::new(provider as Arc<dyn DirectoryProvider>);
    service.load().unwrap();

    assert_eq!(service.cities().unwrap(), vec!["Berlin", "Munich"]);
}

#[test]
fn test_adapter_warnings_surface_through_the_service() {
    let provider = Arc::new(
        StaticProvider::new(sample_users())
            .with_warnings(vec!["Skipping user 9: missing city".to_string()]),
    );
    let service = RosterService::new(provider as Arc<dyn DirectoryProvider>);
    service.load().unwrap();

    let warnings = service.warnings().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("user 9"));
}

#[test]
fn test_status_summary_over_a_loaded_roster() {
    let provider = Arc::new(StaticProvider::new(sample_users()));
    let roster_service = Arc::new(RosterService::new(provider as Arc<dyn DirectoryProvider>));
    roster_service.load().unwrap();

    let status_service = StatusService::new(Arc::clone(&roster_service), false);
    let status = status_service.get_status().unwrap();

    assert_eq!(status.source, "static");
    assert!(!status.demo_mode);
    assert_eq!(status.total_users, 3);
    assert_eq!(status.total_cities, 2);
    assert_eq!(status.cities, vec!["Berlin", "Munich"]);
    assert_eq!(status.birth_date_range.earliest.as_deref(), Some("1962-09-09"));
    assert_eq!(status.birth_date_range.latest.as_deref(), Some("1990-01-01"));
    assert!(status.warnings.is_empty());
}

#[test]
fn test_status_requires_a_loaded_roster() {
    let provider = Arc::new(StaticProvider::new(sample_users()));
    let roster_service = Arc::new(RosterService::new(provider as Arc<dyn DirectoryProvider>));

    let status_service = StatusService::new(roster_service, false);
    assert!(status_service.get_status().is_err());
}

// ============================================================================
// Demo Provider Roundtrip
// ============================================================================

#[test]
fn test_demo_provider_roundtrip() {
    let service = RosterService::new(Arc::new(DemoDirectoryProvider::new()));
    service.load().unwrap();

    let roster = service.roster().unwrap();
    assert_eq!(roster.source, "demo");
    assert!(roster.warnings.is_empty());
    assert_eq!(roster.len(), 13);

    assert_eq!(
        service.cities().unwrap(),
        vec!["Phoenix", "Denver", "Austin", "Seattle"]
    );

    // The fixture pins the tie: Susan Brennan before Frank Delgado
    let denver = service
        .display(&DirectoryFilter::new().with_city("Denver").with_highlight())
        .unwrap();
    let marked: Vec<&str> = denver
        .iter()
        .filter(|d| d.is_oldest)
        .map(|d| d.user.first_name.as_str())
        .collect();
    assert_eq!(marked, vec!["Susan"]);
}
