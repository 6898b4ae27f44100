//! Roster service - load-state machine over the directory source
//!
//! The roster is fetched once per process. Loaded is terminal: there is no
//! refresh path. A failed attempt keeps its message and may be retried.

use std::sync::{Arc, RwLock};

use anyhow::{anyhow, Result};

use crate::domain::result::Error;
use crate::domain::{DisplayUser, Roster};
use crate::ports::DirectoryProvider;
use crate::services::filter::{self, DirectoryFilter};

/// Load state of the roster
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded(Roster),
    Failed(String),
}

/// Service owning the roster and its load state
///
/// State sits behind an RwLock because the interactive browse loop observes
/// it from async context while the fetch runs on a blocking task.
pub struct RosterService {
    provider: Arc<dyn DirectoryProvider>,
    state: RwLock<LoadState>,
}

impl RosterService {
    pub fn new(provider: Arc<dyn DirectoryProvider>) -> Self {
        Self {
            provider,
            state: RwLock::new(LoadState::Idle),
        }
    }

    /// Fetch the roster through the provider
    ///
    /// No-op once loaded. The lock is released while the provider runs, so
    /// observers see Loading during the fetch rather than blocking on it.
    pub fn load(&self) -> Result<()> {
        {
            let mut state = self
                .state
                .write()
                .map_err(|e| anyhow!("Lock poisoned: {}", e))?;
            if matches!(*state, LoadState::Loaded(_)) {
                return Ok(());
            }
            *state = LoadState::Loading;
        }

        let fetched = self.provider.fetch_users();

        let mut state = self
            .state
            .write()
            .map_err(|e| anyhow!("Lock poisoned: {}", e))?;
        match fetched {
            Ok(result) => {
                let roster = Roster::new(result.users, self.provider.name())
                    .with_warnings(result.warnings);
                *state = LoadState::Loaded(roster);
                Ok(())
            }
            Err(e) => {
                *state = LoadState::Failed(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Current load state
    pub fn state(&self) -> Result<LoadState> {
        let state = self
            .state
            .read()
            .map_err(|e| anyhow!("Lock poisoned: {}", e))?;
        Ok(state.clone())
    }

    pub fn is_loading(&self) -> Result<bool> {
        Ok(matches!(self.state()?, LoadState::Loading))
    }

    /// The loaded roster
    pub fn roster(&self) -> Result<Roster> {
        match self.state()? {
            LoadState::Loaded(roster) => Ok(roster),
            _ => Err(Error::NotLoaded("call load() first".to_string()).into()),
        }
    }

    /// Distinct cities of the loaded roster, first-occurrence order
    pub fn cities(&self) -> Result<Vec<String>> {
        Ok(filter::distinct_cities(&self.roster()?))
    }

    /// Derive the display list for the given criteria
    pub fn display(&self, criteria: &DirectoryFilter) -> Result<Vec<DisplayUser>> {
        Ok(filter::apply(&self.roster()?, criteria))
    }

    /// Warnings collected during the fetch
    pub fn warnings(&self) -> Result<Vec<String>> {
        Ok(self.roster()?.warnings)
    }
}
