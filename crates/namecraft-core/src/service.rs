//! The two generation actions over any [`CompletionBackend`].

use std::sync::Arc;

use crate::completion::CompletionBackend;
use crate::criteria::SuggestionCriteria;
use crate::error::CompletionResult;
use crate::prompt::{meaning_request, suggestion_request};
use crate::request::GenerateRequest;
use crate::suggestion::{parse_suggestions, NameSuggestion};

/// Returned when the backend answers with no content.
pub const MEANING_NOT_FOUND: &str = "Meaning not found";

/// Result of one dispatched [`GenerateRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum Generated {
    Meaning(String),
    Names(Vec<NameSuggestion>),
}

#[derive(Clone)]
pub struct NameService {
    backend: Arc<dyn CompletionBackend>,
}

impl NameService {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    pub async fn generate_meaning(&self, name: &str) -> CompletionResult<String> {
        let content = self.backend.complete(&meaning_request(name)).await?;
        Ok(content.unwrap_or_else(|| MEANING_NOT_FOUND.to_string()))
    }

    /// Zero to three records; a malformed reply degrades to fewer records, not an error.
    pub async fn generate_suggestions(
        &self,
        criteria: &SuggestionCriteria,
    ) -> CompletionResult<Vec<NameSuggestion>> {
        let content = self
            .backend
            .complete(&suggestion_request(criteria))
            .await?
            .unwrap_or_default();
        let names = parse_suggestions(&content);
        tracing::debug!(parsed = names.len(), "parsed suggestion reply");
        Ok(names)
    }

    pub async fn dispatch(&self, request: &GenerateRequest) -> CompletionResult<Generated> {
        match request {
            GenerateRequest::Meaning(p) => self.generate_meaning(&p.name).await.map(Generated::Meaning),
            GenerateRequest::Suggestion(c) => self.generate_suggestions(c).await.map(Generated::Names),
        }
    }
}
