//! Конфигурация доступа к API
//!
//! Resolved once in the frontend `start()` and handed to the client; nothing
//! reads it from globals afterwards.

use serde::{Deserialize, Serialize};

/// Same-origin prefix forwarded by the Trunk dev proxy.
pub const DEV_BASE_URL: &str = "/api";

/// Backend host used by release builds unless overridden at build time.
pub const DEFAULT_REMOTE_BASE_URL: &str = "http://109.73.206.144:6969/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeploymentMode {
    Development,
    Production,
}

impl DeploymentMode {
    /// Debug builds are served by `trunk serve`, release builds are deployed.
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            DeploymentMode::Development
        } else {
            DeploymentMode::Production
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Pick the base URL for `mode`.
    ///
    /// Development always talks to the proxy prefix; production uses
    /// `base_url_override` when it is set and non-blank.
    pub fn resolve(
        mode: DeploymentMode,
        base_url_override: Option<&str>,
        api_key: Option<&str>,
    ) -> Self {
        let base_url = match mode {
            DeploymentMode::Development => DEV_BASE_URL,
            DeploymentMode::Production => base_url_override
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .unwrap_or(DEFAULT_REMOTE_BASE_URL),
        };
        Self::new(base_url, api_key.map(str::trim).unwrap_or_default())
    }

    /// Read `DASHBOARD_API_URL` / `DASHBOARD_API_KEY` captured at compile time.
    pub fn from_build_env() -> Self {
        Self::resolve(
            DeploymentMode::current(),
            option_env!("DASHBOARD_API_URL"),
            option_env!("DASHBOARD_API_KEY"),
        )
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
