//! Configuration.
//!
//! - `ApiConfig` - upstream endpoints and HTTP settings, loaded from TOML
//!   with environment overrides
//! - Search and HTTP constants

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;

/// HTTP client configuration.
pub mod http {
    /// Default timeout for a single upstream request.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub const USER_AGENT: &str = concat!("bpyweb/", env!("CARGO_PKG_VERSION"));
}

/// Search configuration.
pub mod search {
    pub const DEFAULT_PAGE_SIZE: u32 = 50;

    /// Largest page size forwarded upstream.
    pub const MAX_PAGE_SIZE: u32 = 100;
}

pub const ENV_API_URL: &str = "BPYWEB_API_URL";
pub const ENV_MIRROR_URL: &str = "BPYWEB_MIRROR_URL";
pub const ENV_TIMEOUT_SECS: &str = "BPYWEB_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the private server API (serves `/v2/...`)
    pub private_api_url: String,
    /// Base URL of the public beatmap mirror (serves `/api/search`)
    pub mirror_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            private_api_url: "http://localhost:8080".to_string(),
            mirror_url: "https://catboy.best".to_string(),
            timeout_secs: http::DEFAULT_TIMEOUT_SECS,
            user_agent: http::USER_AGENT.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config.normalized())
    }

    /// Defaults overridden by `BPYWEB_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup (environment in production).
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.private_api_url = url;
        }
        if let Some(url) = lookup(ENV_MIRROR_URL) {
            self.mirror_url = url;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            match value.trim().parse() {
                Ok(secs) => self.timeout_secs = secs,
                Err(_) => warn!(
                    "Invalid {}: {}, keeping {}",
                    ENV_TIMEOUT_SECS, value, self.timeout_secs
                ),
            }
        }
        self.normalized()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    fn normalized(mut self) -> Self {
        self.private_api_url = self.private_api_url.trim().trim_end_matches('/').to_string();
        self.mirror_url = self.mirror_url.trim().trim_end_matches('/').to_string();
        self
    }
}
