use serde::{Deserialize, Serialize};
use thiserror::Error;

fn default_max_record_ttl() -> u32 {
    604_800 // one week
}

fn default_true() -> bool {
    true
}

/// DNS core configuration.
///
/// Loaded from TOML by the hosting process; every field has a default so an
/// empty document is a valid configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Ceiling applied to record TTLs at decode time. Upstream responses
    /// advertising longer lifetimes are clamped so a single answer cannot
    /// pin a cache entry indefinitely.
    #[serde(default = "default_max_record_ttl")]
    pub max_record_ttl: u32,

    /// When false the resolver forwards every query upstream and never
    /// reads or writes the cache.
    #[serde(default = "default_true")]
    pub cache_enabled: bool,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            max_record_ttl: default_max_record_ttl(),
            cache_enabled: default_true(),
        }
    }
}

impl DnsConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}
