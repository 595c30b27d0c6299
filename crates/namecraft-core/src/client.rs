//! Client adapter for the generate endpoint.
//!
//! Callers never see an error: transport failures, non-2xx answers and
//! undecodable bodies all collapse into a fixed fallback value.

use serde::de::DeserializeOwned;

use crate::criteria::SuggestionCriteria;
use crate::request::{GenerateRequest, MeaningParams, MeaningResponse, SuggestionsResponse};
use crate::suggestion::NameSuggestion;

/// Path of the generate endpoint on the gateway.
pub const GENERATE_PATH: &str = "/api/generate";

/// What [`NameClient::fetch_meaning`] returns when the call fails.
pub const MEANING_UNAVAILABLE: &str = "Unable to fetch name meaning at this time";

#[derive(Debug, Clone)]
pub struct NameClient {
    base_url: String,
    http: reqwest::Client,
}

impl NameClient {
    /// `base_url` is the gateway root, e.g. `http://127.0.0.1:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(crate::config::gateway_url_from_env())
    }

    pub async fn fetch_meaning(&self, name: &str) -> String {
        let request = GenerateRequest::Meaning(MeaningParams {
            name: name.to_string(),
        });
        match self.post::<MeaningResponse>(&request).await {
            Ok(body) => body.meaning,
            Err(e) => {
                tracing::warn!(name, error = %e, "meaning lookup failed");
                MEANING_UNAVAILABLE.to_string()
            }
        }
    }

    pub async fn fetch_suggestions(&self, criteria: &SuggestionCriteria) -> Vec<NameSuggestion> {
        let request = GenerateRequest::Suggestion(criteria.clone());
        match self.post::<SuggestionsResponse>(&request).await {
            Ok(body) => body.names,
            Err(e) => {
                tracing::warn!(error = %e, "suggestion request failed");
                Vec::new()
            }
        }
    }

    async fn post<T: DeserializeOwned>(&self, request: &GenerateRequest) -> reqwest::Result<T> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), GENERATE_PATH);
        self.http
            .post(url)
            .json(&request.to_envelope())
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }
}
