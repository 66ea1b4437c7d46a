// src/outcome/reply.rs
// Interpretation of the model's free-text reply

use super::types::{Decision, OutcomeResult};

/// Outcome used when the model returned no usable text at all
pub const FALLBACK_OUTCOME: &str = "No outcome could be generated";

/// What the model's reply turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelReply {
    /// Reply parsed as `{outcome, time, intensity}`
    Structured(OutcomeResult),
    /// Anything else; holds the trimmed raw text
    Unstructured(String),
}

impl ModelReply {
    /// Parse raw model text. Never fails: unparsable text becomes `Unstructured`.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let unfenced = strip_code_fences(trimmed);

        let parsed = parse_outcome(unfenced)
            .or_else(|| extract_json_block(unfenced).and_then(parse_outcome));

        match parsed {
            Some(result) => ModelReply::Structured(result),
            None => ModelReply::Unstructured(trimmed.to_string()),
        }
    }

    /// Resolve into a result, falling back to the caller's qualifiers.
    ///
    /// Structured replies pass through; an empty time or intensity from the
    /// model is replaced by the caller's value.
    pub fn into_result(self, decision: &Decision) -> OutcomeResult {
        match self {
            ModelReply::Structured(result) => OutcomeResult {
                outcome: result.outcome,
                time: or_fallback(result.time, &decision.time),
                intensity: or_fallback(result.intensity, &decision.intensity),
            },
            ModelReply::Unstructured(raw) => OutcomeResult {
                outcome: if raw.is_empty() {
                    FALLBACK_OUTCOME.to_string()
                } else {
                    raw
                },
                time: decision.time.clone(),
                intensity: decision.intensity.clone(),
            },
        }
    }
}

fn or_fallback(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

fn parse_outcome(candidate: &str) -> Option<OutcomeResult> {
    serde_json::from_str::<OutcomeResult>(candidate)
        .ok()
        .filter(|result| !result.outcome.trim().is_empty())
}

/// Unwrap a reply that Gemini sent as a markdown code block.
///
/// The info string after the opening fence (`json`, `JSON`, nothing) is
/// dropped whatever it says. Without a complete fence pair the reply is
/// only trimmed.
fn strip_code_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return trimmed;
    };

    match inner.split_once('\n') {
        Some((info, body)) if !info.trim_start().starts_with('{') => body.trim(),
        _ => inner.trim(),
    }
}

/// First balanced `{...}` block, for JSON wrapped in prose
fn extract_json_block(s: &str) -> Option<&str> {
    let start = s.find('{')?;

    let bytes = s.as_bytes();
    let mut depth = 0i32;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, &byte) in bytes.iter().enumerate().skip(start) {
        let ch = byte as char;

        if escape_next {
            escape_next = false;
            continue;
        }

        if ch == '\\' && in_string {
            escape_next = true;
            continue;
        }

        if ch == '"' {
            in_string = !in_string;
            continue;
        }

        if in_string {
            continue;
        }

        if ch == '{' {
            depth += 1;
        } else if ch == '}' {
            depth -= 1;
            if depth == 0 {
                return Some(&s[start..=i]);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::types::{DEFAULT_QUALIFIER, DecisionRequest};

    fn defaulted(d: &str) -> Decision {
        DecisionRequest::new(d).validate().unwrap()
    }

    // ============================================================================
    // parse tests
    // ============================================================================

    #[test]
    fn test_parse_plain_json() {
        let reply = ModelReply::parse(
            r#"{"outcome":"junior developer","time":"1 year","intensity":"1h daily"}"#,
        );
        assert_eq!(
            reply,
            ModelReply::Structured(OutcomeResult {
                outcome: "junior developer".to_string(),
                time: "1 year".to_string(),
                intensity: "1h daily".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_fenced_json() {
        let json = r#"{"outcome":"fitter","time":"6 months","intensity":"3x weekly"}"#;
        for fence in ["```json", "```JSON", "```"] {
            let text = format!("{}\n{}\n```", fence, json);
            let reply = ModelReply::parse(&text);
            assert!(matches!(reply, ModelReply::Structured(_)), "{}", fence);
        }
    }

    #[test]
    fn test_parse_json_with_surrounding_prose() {
        let json = r#"{"outcome":"a {brace} inside","time":"1 year","intensity":"daily"}"#;
        let text = format!("Sure! Here it is: {} Hope that helps.", json);
        match ModelReply::parse(&text) {
            ModelReply::Structured(result) => assert_eq!(result.outcome, "a {brace} inside"),
            other => panic!("expected structured reply, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_plain_text() {
        let reply = ModelReply::parse("  You will be a decent cook.  \n");
        assert_eq!(
            reply,
            ModelReply::Unstructured("You will be a decent cook.".to_string())
        );
    }

    #[test]
    fn test_parse_missing_field() {
        let reply = ModelReply::parse(r#"{"outcome":"stronger","time":"1 year"}"#);
        assert!(matches!(reply, ModelReply::Unstructured(_)));
    }

    #[test]
    fn test_parse_wrong_field_type() {
        let reply = ModelReply::parse(r#"{"outcome":"stronger","time":12,"intensity":"daily"}"#);
        assert!(matches!(reply, ModelReply::Unstructured(_)));
    }

    #[test]
    fn test_parse_blank_outcome() {
        let reply = ModelReply::parse(r#"{"outcome":"  ","time":"1 year","intensity":"daily"}"#);
        assert!(matches!(reply, ModelReply::Unstructured(_)));
    }

    #[test]
    fn test_parse_truncated_json() {
        let text = r#"{"outcome":"stronger","time":"1 ye"#;
        assert_eq!(
            ModelReply::parse(text),
            ModelReply::Unstructured(text.to_string())
        );
    }

    // ============================================================================
    // into_result tests
    // ============================================================================

    #[test]
    fn test_structured_passes_through() {
        let result = ModelReply::Structured(OutcomeResult {
            outcome: "junior developer".to_string(),
            time: "1 year".to_string(),
            intensity: "1h daily".to_string(),
        })
        .into_result(&defaulted("coding"));
        assert_eq!(result.outcome, "junior developer");
        assert_eq!(result.time, "1 year");
        assert_eq!(result.intensity, "1h daily");
    }

    #[test]
    fn test_structured_empty_qualifiers_fall_back() {
        let result = ModelReply::Structured(OutcomeResult {
            outcome: "junior developer".to_string(),
            time: String::new(),
            intensity: " ".to_string(),
        })
        .into_result(&defaulted("coding"));
        assert_eq!(result.time, DEFAULT_QUALIFIER);
        assert_eq!(result.intensity, DEFAULT_QUALIFIER);
    }

    #[test]
    fn test_unstructured_keeps_caller_values() {
        let decision = DecisionRequest::new("exercise")
            .with_time("6 months")
            .validate()
            .unwrap();
        let reply = ModelReply::Unstructured("leaner and stronger".to_string());
        let result = reply.into_result(&decision);
        assert_eq!(result.outcome, "leaner and stronger");
        assert_eq!(result.time, "6 months");
        assert_eq!(result.intensity, DEFAULT_QUALIFIER);
    }

    #[test]
    fn test_unstructured_empty_uses_placeholder() {
        let result = ModelReply::parse("   ").into_result(&defaulted("coding"));
        assert_eq!(result.outcome, FALLBACK_OUTCOME);
        assert!(!result.time.is_empty());
        assert!(!result.intensity.is_empty());
    }

    // ============================================================================
    // helper tests
    // ============================================================================

    #[test]
    fn test_strip_code_fences_generic() {
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
    }

    #[test]
    fn test_strip_code_fences_single_line() {
        assert_eq!(strip_code_fences("```{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn test_strip_code_fences_none() {
        assert_eq!(strip_code_fences("  {\"a\":1} "), "{\"a\":1}");
        let unclosed = "```json\n{\"a\":1}";
        assert_eq!(strip_code_fences(unclosed), unclosed);
    }

    #[test]
    fn test_extract_json_block_escaped_quote() {
        let s = r#"x {"a":"he said \"}\" ok"} y"#;
        assert_eq!(extract_json_block(s), Some(r#"{"a":"he said \"}\" ok"}"#));
    }

    #[test]
    fn test_extract_json_block_unbalanced() {
        assert_eq!(extract_json_block("{\"a\": {"), None);
        assert_eq!(extract_json_block("no braces"), None);
    }
}
