// src/config.rs
use std::fmt;
use std::net::SocketAddr;

use reqwest::Url;
use thiserror::Error;

pub const ENDPOINT_VAR: &str = "OPENAI_ENDPOINT";
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const DEPLOYMENT_VAR: &str = "OPENAI_DEPLOYMENT_NAME";
pub const API_VERSION_VAR: &str = "OPENAI_API_VERSION";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

pub const DEFAULT_API_VERSION: &str = "2025-03-01-preview";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Process-wide settings, read once at startup and never mutated.
#[derive(Clone)]
pub struct Config {
    pub endpoint: Url,
    pub api_key: String,
    pub deployment: String,
    pub api_version: String,
    pub bind_addr: SocketAddr,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .field("deployment", &self.deployment)
            .field("api_version", &self.api_version)
            .field("bind_addr", &self.bind_addr)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let raw_endpoint = require(ENDPOINT_VAR)?;
        let endpoint = Url::parse(&raw_endpoint).map_err(|e| ConfigError::Invalid {
            var: ENDPOINT_VAR,
            reason: e.to_string(),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                var: ENDPOINT_VAR,
                reason: format!("unsupported scheme `{}`", endpoint.scheme()),
            });
        }

        let api_key = require(API_KEY_VAR)?;
        let deployment = require(DEPLOYMENT_VAR)?;
        let api_version = get(API_VERSION_VAR).unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        let raw_bind = get(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_bind.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            endpoint,
            api_key,
            deployment,
            api_version,
            bind_addr,
        })
    }
}
