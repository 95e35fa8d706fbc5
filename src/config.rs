use crate::constants::{DEFAULT_BASE_URL, REQUEST_TIMEOUT_SECS};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the Bugsnag Data Access API client
pub struct Config {
    /// Base URL for API requests. Defaults to the public Bugsnag API, but can
    /// be overridden for on-premise installations. Must end with a trailing slash
    pub base_url: String,
    /// Personal authentication token for the Data Access API.
    /// When unset, requests carry no `Authorization` header
    pub authentication_token: Option<String>,
    /// Timeout in seconds for API requests
    pub timeout: u64,
}

impl Config {
    /// Creates a configuration from the environment.
    ///
    /// Reads `BUGSNAG_BASE_URL`, `BUGSNAG_AUTH_TOKEN` and `BUGSNAG_TIMEOUT`,
    /// falling back to the public API URL, no token and the default timeout.
    pub fn new() -> Self {
        dotenv().ok();
        Self {
            base_url: get_env_or_default("BUGSNAG_BASE_URL", DEFAULT_BASE_URL.to_string()),
            authentication_token: get_env_or_none("BUGSNAG_AUTH_TOKEN"),
            timeout: get_env_or_default("BUGSNAG_TIMEOUT", REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
