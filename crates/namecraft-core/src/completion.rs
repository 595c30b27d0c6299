//! Chat-completion backends.
//!
//! [`OpenAiBackend`] speaks the OpenAI-compatible `/chat/completions` protocol
//! (OpenAI, OpenRouter, local proxies). Tests and alternative providers plug in
//! through [`CompletionBackend`].

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::UpstreamConfig;
use crate::error::{CompletionError, CompletionResult};
use crate::prompt::CompletionRequest;

/// Something that turns a system/user pair into reply text.
///
/// `Ok(None)` means the backend answered but produced no content.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult<Option<String>>;
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Option<Vec<ChatChoice>>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatReply>,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// OpenAI-compatible HTTP backend. Built once at startup and shared.
#[derive(Clone)]
pub struct OpenAiBackend {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl fmt::Debug for OpenAiBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiBackend")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .finish()
    }
}

impl OpenAiBackend {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self::new(&config.base_url, &config.api_key, &config.model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn complete(&self, request: &CompletionRequest) -> CompletionResult<Option<String>> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        tracing::debug!(model = %self.model, max_tokens = request.max_tokens, "sending completion request");

        let res = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(CompletionError::Upstream(status.as_u16(), text));
        }

        let parsed: ChatResponse = serde_json::from_str(&text)?;
        let content = parsed
            .choices
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .filter(|s| !s.is_empty());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_api_key() {
        let backend = OpenAiBackend::new("https://api.openai.com/v1", "sk-live-secret", "gpt-4o-mini");
        let shown = format!("{:?}", backend);
        assert!(!shown.contains("sk-live-secret"));
        assert!(shown.contains("<redacted>"));
        assert!(shown.contains("gpt-4o-mini"));
    }
}
