//! OpenAI-compatible chat-completions client.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CompletionConfig;
use crate::credential::Credential;
use crate::error::CompletionError;

use super::client::CompletionClient;

/// Cap on raw error bodies carried into error messages.
const MAX_ERROR_BODY_CHARS: usize = 500;

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client for `POST /v1/chat/completions` style endpoints.
pub struct OpenAiClient {
    http: Client,
    config: CompletionConfig,
}

impl OpenAiClient {
    pub fn new(config: CompletionConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    pub fn with_http_client(http: Client, config: CompletionConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        prompt: &str,
        credential: &Credential,
    ) -> Result<String, CompletionError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(
            model = %self.config.model,
            endpoint = %self.config.endpoint,
            prompt_chars = prompt.len(),
            "Requesting completion"
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(credential.expose())
            .header(ACCEPT, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Provider {
                status: status.as_u16(),
                message: provider_message(status, &body),
            });
        }

        let payload: ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        first_choice_text(payload)
    }
}

/// Text of the first choice; missing or null content becomes `""`.
fn first_choice_text(payload: ChatResponse) -> Result<String, CompletionError> {
    let choice = payload.choices.into_iter().next().ok_or_else(|| {
        CompletionError::InvalidResponse("response contained no choices".to_string())
    })?;

    let text = choice
        .message
        .and_then(|m| m.content)
        .unwrap_or_default()
        .trim()
        .to_string();

    debug!(chars = text.len(), "Received completion");
    Ok(text)
}

/// Best human-readable message from an error response.
fn provider_message(status: StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(message) = envelope.error.message.filter(|m| !m.trim().is_empty())
    {
        return message.trim().to_string();
    }

    let body = body.trim();
    if !body.is_empty() {
        return body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    }

    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}
