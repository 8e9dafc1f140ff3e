//! Board Configuration
//!
//! Compiled-in endpoint and asset locations, overridable when mounting.

use tracing::Level;

/// Remote resource serving `{ tickets, users }`
pub const DEFAULT_ENDPOINT: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

/// Base path of icons and avatars
pub const DEFAULT_ASSET_BASE: &str = "/Assets/";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub endpoint: String,
    pub asset_base: String,
    pub log_level: Level,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl BoardConfig {
    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }
}
