//! Configuration loaded from the environment (and `.env`, loaded by the binaries).
//!
//! | Env | Default | Description |
//! |-----|---------|-------------|
//! | NAMECRAFT_BIND | 127.0.0.1:8000 | Gateway listen address. |
//! | OPENAI_API_KEY | (required) | Bearer key for the completion backend. |
//! | OPENAI_BASE_URL | https://api.openai.com/v1 | OpenAI-compatible base URL. |
//! | NAMECRAFT_MODEL | gpt-4o-mini | Model id sent upstream. |
//! | NAMECRAFT_GATEWAY_URL | http://127.0.0.1:8000 | Where clients reach the gateway. |

use std::net::SocketAddr;

use crate::error::ConfigError;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:8000";

/// Completion backend settings.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl UpstreamConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env_opt_string("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;
        Ok(Self {
            base_url: env_opt_string("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            model: env_opt_string("NAMECRAFT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

/// Everything the gateway binary needs at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind: SocketAddr,
    pub upstream: UpstreamConfig,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_raw = env_opt_string("NAMECRAFT_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
            name: "NAMECRAFT_BIND",
            reason: e.to_string(),
        })?;
        Ok(Self {
            bind,
            upstream: UpstreamConfig::from_env()?,
        })
    }
}

/// Base URL of a running gateway, for [`crate::client::NameClient`].
pub fn gateway_url_from_env() -> String {
    env_opt_string("NAMECRAFT_GATEWAY_URL").unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string())
}

fn env_opt_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
