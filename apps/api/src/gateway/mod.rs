/// Model Gateway — the single point of entry for all model-provider calls.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// All model interactions MUST go through `ModelGateway`.
///
/// Model: claude-sonnet-4-20250514 (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for every call.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "claude-sonnet-4-20250514";
const MAX_TOKENS: u32 = 4000;

/// Failure modes of a model call, decoupled from the provider's own error
/// vocabulary. The router translates these onto HTTP statuses.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid or missing API credential")]
    Authentication,

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("upstream failure: {0}")]
    Upstream(String),
}

/// One text-generation call against the external model provider.
///
/// Implementations issue exactly one call per invocation and block until the
/// provider responds or the transport fails — no retry, no bespoke timeout.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

impl AnthropicResponse {
    /// Extracts the text content from the first text block.
    fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Maps a non-success provider status onto the closed error set.
/// Only 401 counts as an authentication failure; 403 and everything else
/// falls through to `Upstream` with the provider's message attached.
fn map_failure(status: StatusCode, message: String) -> GatewayError {
    match status {
        StatusCode::UNAUTHORIZED => GatewayError::Authentication,
        StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited,
        _ => GatewayError::Upstream(format!("provider returned {status}: {message}")),
    }
}

/// Production gateway backed by the Anthropic Messages API.
pub struct AnthropicGateway {
    client: Client,
    api_key: String,
}

impl AnthropicGateway {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl ModelGateway for AnthropicGateway {
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system: prompts::SYSTEM_PROMPT,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GatewayError::Upstream(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the provider's own message when the body parses.
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(map_failure(status, message));
        }

        let parsed: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Upstream(e.to_string()))?;

        let text = parsed
            .text()
            .ok_or_else(|| GatewayError::Upstream("provider returned no text content".to_string()))?;

        debug!("Model call succeeded ({} chars)", text.len());

        Ok(text.to_string())
    }
}
