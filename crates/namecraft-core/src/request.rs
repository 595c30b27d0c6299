//! The generate endpoint's `{action, params}` envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::criteria::SuggestionCriteria;
use crate::error::RequestError;
use crate::suggestion::NameSuggestion;

pub const ACTION_MEANING: &str = "generateMeaning";
pub const ACTION_SUGGESTION: &str = "generateSuggestion";

/// Raw request body before the action is known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub action: String,
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeaningParams {
    pub name: String,
}

/// Success body for `generateMeaning`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeaningResponse {
    pub meaning: String,
}

/// Success body for `generateSuggestion`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    #[serde(default)]
    pub names: Vec<NameSuggestion>,
}

/// Body of every 4xx/5xx answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A validated request, one variant per action.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateRequest {
    Meaning(MeaningParams),
    Suggestion(SuggestionCriteria),
}

impl GenerateRequest {
    pub fn action(&self) -> &'static str {
        match self {
            GenerateRequest::Meaning(_) => ACTION_MEANING,
            GenerateRequest::Suggestion(_) => ACTION_SUGGESTION,
        }
    }

    /// Build the envelope a client posts for this request.
    pub fn to_envelope(&self) -> Envelope {
        let params = match self {
            GenerateRequest::Meaning(p) => serde_json::to_value(p),
            GenerateRequest::Suggestion(c) => serde_json::to_value(c),
        };
        Envelope {
            action: self.action().to_string(),
            params: params.unwrap_or(Value::Null),
        }
    }
}

impl TryFrom<Envelope> for GenerateRequest {
    type Error = RequestError;

    fn try_from(envelope: Envelope) -> Result<Self, Self::Error> {
        let invalid = |reason: String| RequestError::InvalidParams {
            action: envelope.action.clone(),
            reason,
        };
        match envelope.action.as_str() {
            ACTION_MEANING => {
                let params: MeaningParams = serde_json::from_value(envelope.params.clone())
                    .map_err(|e| invalid(e.to_string()))?;
                if params.name.trim().is_empty() {
                    return Err(invalid("name is empty".to_string()));
                }
                Ok(GenerateRequest::Meaning(params))
            }
            ACTION_SUGGESTION => serde_json::from_value(envelope.params.clone())
                .map(GenerateRequest::Suggestion)
                .map_err(|e| invalid(e.to_string())),
            other => Err(RequestError::UnknownAction(other.to_string())),
        }
    }
}
