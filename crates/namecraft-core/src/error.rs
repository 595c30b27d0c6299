//! Error types for Namecraft.

use thiserror::Error;

/// Result alias for upstream generation calls.
pub type CompletionResult<T> = Result<T, CompletionError>;

/// Failures talking to the chat-completion backend.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("completion request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("completion backend {0}: {1}")]
    Upstream(u16, String),

    #[error("completion response parse: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures decoding the `{action, params}` envelope at the endpoint boundary.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("invalid params for {action}: {reason}")]
    InvalidParams { action: String, reason: String },
}

/// Missing or malformed environment configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}
