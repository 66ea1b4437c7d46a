// src/web/state.rs
// Web server state management

use std::sync::Arc;

use crate::llm::LlmClient;
use crate::outcome::OutcomeService;

/// Shared application state.
///
/// Built once at startup; read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub outcomes: OutcomeService,
}

impl AppState {
    /// Create new application state around a model client
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            outcomes: OutcomeService::new(llm),
        }
    }
}
