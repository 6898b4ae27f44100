//! Demo service - manage demo mode
//!
//! Demo mode serves the built-in fixture roster instead of the network, so
//! the tool can be tried offline.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::Config;

/// Demo service for managing demo mode
pub struct DemoService {
    census_dir: PathBuf,
}

impl DemoService {
    pub fn new(census_dir: &Path) -> Self {
        Self {
            census_dir: census_dir.to_path_buf(),
        }
    }

    /// Check if demo mode is currently enabled
    pub fn is_enabled(&self) -> Result<bool> {
        let config = Config::load(&self.census_dir)?;
        Ok(config.demo_mode)
    }

    /// Enable demo mode
    pub fn enable(&self) -> Result<()> {
        let mut config = Config::load(&self.census_dir).unwrap_or_default();
        config.enable_demo_mode();
        config.save(&self.census_dir)?;
        Ok(())
    }

    /// Disable demo mode
    pub fn disable(&self) -> Result<()> {
        let mut config = Config::load(&self.census_dir).unwrap_or_default();
        config.disable_demo_mode();
        config.save(&self.census_dir)?;
        Ok(())
    }
}
