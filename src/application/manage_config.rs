//! Config management use case

use crate::error::Result;
use crate::infrastructure::Config;
use std::path::PathBuf;

/// Service for reading and writing the config file
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Create a new config service for the given file
    pub fn new(path: PathBuf) -> Self {
        ConfigService { path }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        Config::load(&self.path)?.get(key)
    }

    /// Set a config value and write the file
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load(&self.path)?;
        config.set(key, value)?;
        config.save(&self.path)?;
        log::info!("Set {} in {}", key, self.path.display());
        Ok(())
    }

    /// Effective config, defaults filled in
    pub fn list(&self) -> Result<Config> {
        Config::load(&self.path)
    }
}
