use serde::{Deserialize, Serialize};

/// Response cache housekeeping
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Seconds between expired-entry sweeps, 0 disables the reaper (default: 600)
    #[serde(default = "default_reaper_interval")]
    pub reaper_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            reaper_interval_secs: default_reaper_interval(),
        }
    }
}

fn default_reaper_interval() -> u64 {
    600
}
