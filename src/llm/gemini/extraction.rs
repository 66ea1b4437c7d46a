// src/llm/gemini/extraction.rs
// Response extraction helpers for Gemini API responses

use crate::llm::gemini::types::{GeminiCandidate, GeminiContent, GeminiResponse};

/// First candidate of a response, if any
pub fn first_candidate(response: &GeminiResponse) -> Option<&GeminiCandidate> {
    response.candidates.as_ref().and_then(|c| c.first())
}

/// Extract the first non-thought text part from a candidate's content
pub fn extract_first_text(content: &GeminiContent) -> Option<String> {
    content
        .parts
        .iter()
        .filter(|part| !part.thought)
        .find_map(|part| part.text.clone())
}

/// Extract the first textual content of the first candidate
pub fn extract_response_text(response: &GeminiResponse) -> Option<String> {
    first_candidate(response)
        .and_then(|candidate| candidate.content.as_ref())
        .and_then(extract_first_text)
}
