use serde::{Deserialize, Serialize};

use crate::share::DEFAULT_INTENT_URL;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where quotes come from and how long to wait for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL of the JSON quote document.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Share link settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Intent endpoint; the share text is passed as its `text` parameter.
    #[serde(default = "default_intent_url")]
    pub intent_url: String,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw / spinner interval in milliseconds (default: 120).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

pub const DEFAULT_ENDPOINT: &str = "https://cdn.jsdelivr.net/gh/morsewall/jsondb@master/db.json";

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_intent_url() -> String {
    DEFAULT_INTENT_URL.to_string()
}

fn default_tick_rate_ms() -> u64 {
    120
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_seconds: default_request_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            intent_url: default_intent_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
