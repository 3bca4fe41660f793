//! Client configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Address of the clinic API when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Options for building a [`crate::ClinicClient`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix for every request path
    pub base_url: String,
    /// Request timeout in seconds; not applied in the browser
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
