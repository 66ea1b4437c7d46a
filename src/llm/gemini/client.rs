// src/llm/gemini/client.rs
// Google Gemini API client (single non-streaming generateContent call, no retries)

use crate::error::{ForesightError, Result};
use crate::llm::gemini::extraction::{extract_response_text, first_candidate};
use crate::llm::gemini::types::{GeminiErrorEnvelope, GeminiRequest, GeminiResponse};
use crate::llm::logging::log_generation;
use crate::llm::{Generation, LlmClient, Usage};
use async_trait::async_trait;
use std::time::Instant;
use tracing::{Span, debug, info, instrument};
use uuid::Uuid;

/// Google Gemini API client
pub struct GeminiClient {
    api_key: String,
    model: String,
    api_base: String,
    http: reqwest::Client,
}

impl GeminiClient {
    /// Create a Gemini client on top of a shared HTTP client.
    ///
    /// `api_base` is the REST root without the `/models/...` suffix, so tests
    /// can point it at a local stand-in.
    pub fn with_http_client(
        api_key: String,
        model: String,
        api_base: String,
        client: reqwest::Client,
    ) -> Self {
        Self {
            api_key,
            model,
            api_base,
            http: client,
        }
    }

    /// Full generateContent URL for the configured model
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

/// Turn a non-2xx body into a readable message, preferring the API's own error text
fn describe_error_body(body: &str) -> String {
    match serde_json::from_str::<GeminiErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(status) => format!("{} ({})", envelope.error.message, status),
            None => envelope.error.message,
        },
        Err(_) => body.trim().to_string(),
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    fn model_name(&self) -> String {
        self.model.clone()
    }

    #[instrument(
        skip(self, prompt),
        fields(request_id, model = %self.model, prompt_len = prompt.len())
    )]
    async fn generate(&self, prompt: &str) -> Result<Generation> {
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();

        Span::current().record("request_id", request_id.as_str());

        info!(
            request_id = %request_id,
            model = %self.model,
            "Starting Gemini generateContent request"
        );

        let request = GeminiRequest::from_prompt(prompt);
        debug!(request_id = %request_id, "Gemini prompt: {}", prompt);

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ForesightError::Llm(format!(
                "Gemini API error {}: {}",
                status,
                describe_error_body(&body)
            )));
        }

        let data: GeminiResponse = serde_json::from_str(&body)?;

        if let Some(error) = data.error {
            return Err(ForesightError::Llm(format!(
                "Gemini error: {}",
                error.message
            )));
        }

        let duration_ms = start_time.elapsed().as_millis() as u64;
        let text = extract_response_text(&data);
        let finish_reason = first_candidate(&data).and_then(|c| c.finish_reason.clone());

        let usage = data.usage_metadata.map(|u| Usage {
            prompt_tokens: u.prompt_token_count,
            completion_tokens: u.candidates_token_count.unwrap_or(0),
            total_tokens: u.total_token_count,
        });

        let generation = Generation {
            request_id,
            text,
            finish_reason,
            usage,
            duration_ms,
        };
        log_generation(&self.model, &generation);

        Ok(generation)
    }
}
