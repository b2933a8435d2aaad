/// LLM Client — the single point of entry for all inference API calls.
///
/// ARCHITECTURAL RULE: No other module may call the inference API directly.
/// All model interactions MUST go through this module.
use anyhow::{Context, Result};
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    /// Block until the model is loaded instead of failing with 503.
    wait_for_model: bool,
}

/// Client for a hosted text-generation inference endpoint.
/// No retries and no timeout beyond the transport defaults.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl LlmClient {
    pub fn new(api_key: String, endpoint: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends the prompt and returns the model's generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let request_body = InferenceRequest {
            inputs: prompt,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Inference API returned {status}: {body}");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let data: Value = response.json().await?;
        let text = generated_text(&data);

        debug!("Inference call succeeded: generated_text_len={}", text.len());

        Ok(text)
    }

    /// Calls the model and deserializes the JSON document embedded in its output.
    pub async fn generate_json<T: DeserializeOwned>(&self, prompt: &str) -> Result<T, LlmError> {
        let text = self.generate(prompt).await?;
        let payload = extract_json_payload(&text);
        serde_json::from_str(payload).map_err(LlmError::Parse)
    }
}

/// Reduces an inference response to its generated text.
///
/// Text-generation endpoints answer either `[{"generated_text": ...}]` or
/// `{"generated_text": ...}`; anything else is handed on re-serialized.
pub fn generated_text(data: &Value) -> String {
    let non_empty = |v: Option<&Value>| {
        v.and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    non_empty(data.get(0).and_then(|first| first.get("generated_text")))
        .or_else(|| non_empty(data.get("generated_text")))
        .unwrap_or_else(|| data.to_string())
}

/// Returns the trimmed content of the first ```` ```json ```` fenced block, if
/// the text contains one that is closed.
pub fn extract_fenced_json(text: &str) -> Option<&str> {
    const OPEN: &str = "```json";
    const CLOSE: &str = "```";

    let start = text.find(OPEN)? + OPEN.len();
    let len = text[start..].find(CLOSE)?;
    Some(text[start..start + len].trim())
}

/// The fenced JSON block when present, otherwise the whole text unchanged.
pub fn extract_json_payload(text: &str) -> &str {
    match extract_fenced_json(text) {
        Some(fenced) => {
            debug!("Extracted fenced JSON block from model output");
            fenced
        }
        None => text,
    }
}
