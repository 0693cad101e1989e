//! Client Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default inventory API endpoint
pub const DEFAULT_API_BASE: &str = "https://gotoyuki-app.onrender.com";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the inventory API, without trailing slash
    pub base_url: String,
    /// Per-request timeout; only honoured on native targets
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout_secs: 15,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Default::default()
        }
        .normalized()
    }

    /// Default config with `ZAIKO_API_BASE` baked in at build time, if set.
    /// A browser bundle has no runtime environment to read.
    pub fn from_build_env() -> Self {
        match option_env!("ZAIKO_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::new(base.trim()),
            _ => Self::default(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Strip trailing slashes so paths can be appended verbatim.
    pub fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
