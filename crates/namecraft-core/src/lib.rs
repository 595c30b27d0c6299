//! Namecraft core library.
//! Suggestion criteria, prompt building, reply parsing, the completion backend
//! and the client adapter for the generate endpoint.

pub mod client;
pub mod completion;
pub mod config;
pub mod criteria;
pub mod error;
pub mod prompt;
pub mod request;
pub mod service;
pub mod suggestion;

pub use client::{NameClient, GENERATE_PATH, MEANING_UNAVAILABLE};
pub use completion::{CompletionBackend, OpenAiBackend};
pub use config::{GatewayConfig, UpstreamConfig};
pub use criteria::{Gender, LengthPreference, Popularity, SuggestionCriteria};
pub use error::{CompletionError, CompletionResult, ConfigError, RequestError};
pub use prompt::CompletionRequest;
pub use request::{
    Envelope, ErrorResponse, GenerateRequest, MeaningParams, MeaningResponse, SuggestionsResponse,
};
pub use service::{Generated, NameService, MEANING_NOT_FOUND};
pub use suggestion::{parse_suggestions, NameSuggestion};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #[test]
    fn version_matches_manifest() {
        assert_eq!(super::version(), env!("CARGO_PKG_VERSION"));
        assert!(!super::version().is_empty());
    }
}
