// src/outcome/prompt.rs
// Prompt construction for outcome projection

use super::types::{DEFAULT_QUALIFIER, Decision};

/// Fixed prompt for the `GET /` smoke route
pub const SMOKE_TEST_PROMPT: &str = "Hello, say something random!";

/// Role and style instructions
const INSTRUCTIONS: &str = r#"You are an assistant that projects short, realistic outcomes of personal decisions.
Given a decision, a time span, and an intensity, describe the most likely result or future state.
The outcome must be concise but realistic: 12 words or fewer."#;

/// Few-shot examples: (decision, time, intensity, outcome)
const EXAMPLES: &[(&str, &str, &str, &str)] = &[
    (
        "coding",
        "1 year",
        "1h daily",
        "able to build small projects, possibly a junior developer",
    ),
    (
        "exercise",
        "6 months",
        "3x weekly",
        "noticeably stronger, more stamina, leaner body",
    ),
    (
        "learn guitar",
        "2 years",
        "30min daily",
        "plays songs smoothly, solid rhythm, intermediate guitarist",
    ),
    (
        "fasting",
        "3 months",
        "16:8 daily",
        "steady weight loss, better appetite control, more energy",
    ),
];

/// Output contract appended to every outcome prompt
const OUTPUT_CONTRACT: &str = r#"Respond with strict JSON only. No Markdown, no code fences, no extra text.
Use exactly this shape:
{"outcome": string, "time": string, "intensity": string}"#;

/// Quote a value as a JSON string literal so user text cannot break the prompt layout
fn quoted(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Build the outcome prompt for a validated decision
pub fn build_outcome_prompt(decision: &Decision) -> String {
    let mut prompt = String::from(INSTRUCTIONS);

    prompt.push_str(&format!(
        "\nIf the time or intensity is {}, replace it with a realistic value for the decision \
         and report that value in your answer.",
        quoted(DEFAULT_QUALIFIER)
    ));

    prompt.push_str("\n\nExamples:\n");
    for (example, time, intensity, outcome) in EXAMPLES {
        prompt.push_str(&format!(
            "Decision: {}, Time: {}, Intensity: {}\n",
            quoted(example),
            quoted(time),
            quoted(intensity)
        ));
        let answer = serde_json::json!({
            "outcome": outcome,
            "time": time,
            "intensity": intensity,
        });
        prompt.push_str(&answer.to_string());
        prompt.push('\n');
    }

    prompt.push_str("\nNow generate one outcome:\n");
    prompt.push_str(&format!(
        "Decision: {}, Time: {}, Intensity: {}\n\n",
        quoted(&decision.decision),
        quoted(&decision.time),
        quoted(&decision.intensity)
    ));
    prompt.push_str(OUTPUT_CONTRACT);

    prompt
}
