//! Session configuration, threaded through construction instead of living in globals.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{DashError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Log the grid layout whenever it changes.
    pub debug: bool,
    /// Key that ends the event loop, see `Key::parse` for accepted names.
    pub quit_key: String,
    /// Interval between refresh ticks; 0 disables ticking.
    pub tick_ms: u64,
    /// Packed background attribute of the grid body.
    pub background: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            debug: false,
            quit_key: "q".to_string(),
            tick_ms: 1000,
            background: 0,
        }
    }
}

impl DashboardConfig {
    pub fn tick(&self) -> Option<Duration> {
        (self.tick_ms > 0).then(|| Duration::from_millis(self.tick_ms))
    }
}

/// Read a JSON config file; absent fields take their defaults.
pub fn load_config(path: &Path) -> Result<DashboardConfig> {
    let data = std::fs::read_to_string(path)?;
    serde_json::from_str(&data)
        .map_err(|err| DashError::Config(format!("{}: {}", path.display(), err)))
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
