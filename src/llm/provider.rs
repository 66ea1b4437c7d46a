// src/llm/provider.rs
// LLM provider abstraction layer

use async_trait::async_trait;

use crate::error::Result;

/// Token usage reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Result of a single text generation call
#[derive(Debug, Clone, Default)]
pub struct Generation {
    /// Correlation id for logs
    pub request_id: String,
    /// First textual content of the first candidate, if any
    pub text: Option<String>,
    /// Why the provider stopped generating (e.g. "STOP", "SAFETY")
    pub finish_reason: Option<String>,
    pub usage: Option<Usage>,
    pub duration_ms: u64,
}

impl Generation {
    /// Text content, or an empty string when the model produced none
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}

/// Trait for LLM clients.
///
/// One call per invocation, no retries. Implementations must be shareable
/// across concurrent requests.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single prompt and return the generated text
    async fn generate(&self, prompt: &str) -> Result<Generation>;

    /// Model identifier used for requests
    fn model_name(&self) -> String;
}
