/// LLM Client — the single point of entry for all Claude API calls.
///
/// No other module may call the Anthropic API directly; the tailoring
/// collaborator goes through `LlmClient::call`.
///
/// Model: claude-sonnet-4-5 (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all LLM calls.
pub const MODEL: &str = "claude-sonnet-4-5";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} attempts")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
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

/// Wraps the Anthropic Messages API.
/// `max_attempts` of 1 means a single request with no retry.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    max_attempts: u32,
}

impl LlmClient {
    pub fn new(api_key: String, max_attempts: u32) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()?,
            api_key,
            max_attempts: max_attempts.max(1),
        })
    }

    /// Makes a raw call to the Claude API, returning the full response object.
    /// When more than one attempt is configured, 429 and 5xx responses are retried
    /// with exponential backoff.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
        temperature: f32,
    ) -> Result<LlmResponse, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            temperature,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut last_error: Option<LlmError> = None;

        for attempt in 0..self.max_attempts {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay = std::time::Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(ANTHROPIC_API_URL)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<AnthropicError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let llm_response: LlmResponse = response.json().await?;

            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                llm_response.usage.input_tokens, llm_response.usage.output_tokens
            );

            return Ok(llm_response);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: self.max_attempts,
        }))
    }

    /// Calls the LLM and returns its text with any wrapping code fence removed.
    pub async fn call_text(
        &self,
        prompt: &str,
        system: &str,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let response = self.call(prompt, system, temperature).await?;
        let text = strip_code_fences(response.text().ok_or(LlmError::EmptyContent)?);
        if text.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(text.to_string())
    }
}

/// Strips a ```lang ... ``` fence wrapping the whole output, if present.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(stripped) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the info string (```text, ```markdown) on the opening line.
    let body = match stripped.split_once('\n') {
        Some((info, rest)) if !info.trim().contains(' ') => rest,
        _ => stripped,
    };
    body.trim_end()
        .strip_suffix("```")
        .map(|s| s.trim())
        .unwrap_or(body.trim())
}
