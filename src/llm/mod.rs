// src/llm/mod.rs
// LLM inference clients (Gemini)

pub mod gemini;
mod logging;
mod provider;

pub use gemini::GeminiClient;
pub use provider::{Generation, LlmClient, Usage};
