// src/outcome/types.rs
// Request/response values for decision evaluation

use serde::{Deserialize, Serialize};

use crate::error::{ForesightError, Result};

/// Placeholder for an unspecified time or intensity. The model is asked to
/// replace it with a realistic value.
pub const DEFAULT_QUALIFIER: &str = "general";

/// Message returned when the decision is absent
pub const DECISION_REQUIRED: &str = "decision is required";

/// Inbound request body for `POST /decision`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionRequest {
    #[serde(default)]
    pub decision: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub intensity: Option<String>,
}

impl DecisionRequest {
    pub fn new(decision: impl Into<String>) -> Self {
        Self {
            decision: Some(decision.into()),
            ..Self::default()
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_intensity(mut self, intensity: impl Into<String>) -> Self {
        self.intensity = Some(intensity.into());
        self
    }

    /// Check presence of the decision and fill in defaults.
    ///
    /// Whitespace-only strings count as absent. Present values are kept
    /// exactly as sent, so the response echoes the caller's own text.
    pub fn validate(self) -> Result<Decision> {
        let decision = non_blank(self.decision)
            .ok_or_else(|| ForesightError::InvalidInput(DECISION_REQUIRED.to_string()))?;

        Ok(Decision {
            decision,
            time: qualifier(self.time),
            intensity: qualifier(self.intensity),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn qualifier(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| DEFAULT_QUALIFIER.to_string())
}

/// A validated decision; every field is non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub decision: String,
    pub time: String,
    pub intensity: String,
}

/// Projected outcome, possibly with model-revised time and intensity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeResult {
    pub outcome: String,
    pub time: String,
    pub intensity: String,
}

/// Response body for `POST /decision`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub decision: String,
    pub time: String,
    pub intensity: String,
    pub outcome: String,
}

impl DecisionResponse {
    pub fn new(decision: Decision, result: OutcomeResult) -> Self {
        Self {
            decision: decision.decision,
            time: result.time,
            intensity: result.intensity,
            outcome: result.outcome,
        }
    }
}
