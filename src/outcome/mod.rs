// src/outcome/mod.rs
// Decision evaluation: prompt the model once, then repair its reply

pub mod prompt;
pub mod reply;
pub mod types;

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::error::Result;
use crate::llm::LlmClient;

pub use prompt::{SMOKE_TEST_PROMPT, build_outcome_prompt};
pub use reply::{FALLBACK_OUTCOME, ModelReply};
pub use types::{
    DECISION_REQUIRED, DEFAULT_QUALIFIER, Decision, DecisionRequest, DecisionResponse,
    OutcomeResult,
};

/// Projects outcomes for decisions using a shared model client
#[derive(Clone)]
pub struct OutcomeService {
    llm: Arc<dyn LlmClient>,
}

impl OutcomeService {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub fn model_name(&self) -> String {
        self.llm.model_name()
    }

    /// Evaluate a decision.
    ///
    /// Input is validated before the model is called. A malformed reply
    /// degrades to the fallback result; only remote failures are errors.
    #[instrument(skip(self, request))]
    pub async fn evaluate_decision(&self, request: DecisionRequest) -> Result<DecisionResponse> {
        let decision = request.validate()?;
        debug!(
            decision = %decision.decision,
            time = %decision.time,
            intensity = %decision.intensity,
            "Evaluating decision"
        );

        let prompt = build_outcome_prompt(&decision);
        let generation = self.llm.generate(&prompt).await?;

        let reply = ModelReply::parse(generation.text_or_empty());
        match &reply {
            ModelReply::Structured(_) => {
                info!(request_id = %generation.request_id, "Model reply parsed");
            }
            ModelReply::Unstructured(raw) => {
                warn!(
                    request_id = %generation.request_id,
                    finish_reason = generation.finish_reason.as_deref().unwrap_or("unknown"),
                    raw = %raw,
                    "Model reply is not outcome JSON, using fallback"
                );
            }
        }

        let result = reply.into_result(&decision);
        Ok(DecisionResponse::new(decision, result))
    }

    /// Send the fixed smoke-test prompt and return the raw text
    pub async fn smoke_test(&self) -> Result<String> {
        let generation = self.llm.generate(SMOKE_TEST_PROMPT).await?;
        Ok(generation.text.unwrap_or_default())
    }
}
