//! Census Core - business logic for the user directory viewer
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (User, Roster, etc.)
//! - **ports**: Trait definitions for external dependencies (DirectoryProvider)
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (dummyjson HTTP client, demo data)

pub mod domain;
pub mod ports;
pub mod services;
pub mod adapters;
pub mod config;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::demo::DemoDirectoryProvider;
use adapters::dummyjson::{DummyJsonProvider, DEFAULT_USERS_URL};
use config::Config;
use ports::DirectoryProvider;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{DisplayUser, Roster, User};
pub use services::{
    DirectoryFilter, LoadState, LogEntry, LogEvent, LoggingService, RosterService,
};

use services::{DemoService, StatusService};

/// Main context for Census operations
///
/// This is the primary entry point for all business logic. It holds the
/// configuration, the directory provider, and all services.
pub struct CensusContext {
    pub config: Config,
    pub provider: Arc<dyn DirectoryProvider>,
    pub roster_service: Arc<RosterService>,
    pub status_service: StatusService,
    pub demo_service: DemoService,
}

impl CensusContext {
    /// Create a new Census context
    pub fn new(census_dir: &Path) -> Result<Self> {
        let config = Config::load(census_dir)?;

        // Demo mode swaps the network source for the built-in fixture
        let provider: Arc<dyn DirectoryProvider> = if config.demo_mode {
            Arc::new(DemoDirectoryProvider::new())
        } else {
            let url = config.source_url.as_deref().unwrap_or(DEFAULT_USERS_URL);
            Arc::new(DummyJsonProvider::new(url))
        };

        // Create services
        let roster_service = Arc::new(RosterService::new(Arc::clone(&provider)));
        let status_service = StatusService::new(Arc::clone(&roster_service), config.demo_mode);
        let demo_service = DemoService::new(census_dir);

        Ok(Self {
            config,
            provider,
            roster_service,
            status_service,
            demo_service,
        })
    }
}
