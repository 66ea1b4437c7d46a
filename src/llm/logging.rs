// src/llm/logging.rs
// Per-call log line for generateContent

use super::Generation;
use tracing::info;

/// Log one finished generateContent call under its request id.
///
/// Token counts come from Gemini's `usageMetadata`; blocked prompts often
/// carry none, in which case only timing and finish reason are logged.
pub fn log_generation(model: &str, generation: &Generation) {
    let text_len = generation.text.as_ref().map_or(0, String::len);
    let finish_reason = generation.finish_reason.as_deref().unwrap_or("unknown");

    match &generation.usage {
        Some(usage) => info!(
            request_id = %generation.request_id,
            model = %model,
            duration_ms = generation.duration_ms,
            text_len,
            finish_reason,
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            total_tokens = usage.total_tokens,
            "Gemini call complete"
        ),
        None => info!(
            request_id = %generation.request_id,
            model = %model,
            duration_ms = generation.duration_ms,
            text_len,
            finish_reason,
            "Gemini call complete without usage metadata"
        ),
    }
}
