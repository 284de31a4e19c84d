//! Pull structured data out of free-form model output.
//!
//! Models are told not to wrap their JSON in markdown, and regularly do it
//! anyway. Every "```json" and "```" marker is removed before parsing, then
//! the payload is checked against the shape that was asked for.

use serde::Deserialize;
use store::{Tip, TipDetail};

use crate::llm::GenerationError;

/// Number of tips and of detail steps the prompts ask for.
pub const EXPECTED_COUNT: usize = 5;

/// Remove code-fence markers and surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

#[derive(Deserialize)]
struct RawTip {
    title: String,
    preview: String,
}

#[derive(Deserialize)]
struct RawDetail {
    explanation: String,
    steps: Vec<String>,
}

/// Parse a tips answer: a JSON array of exactly five non-empty tips.
pub fn parse_tips(text: &str) -> Result<Vec<Tip>, GenerationError> {
    let raw: Vec<RawTip> = serde_json::from_str(&strip_code_fences(text))?;
    if raw.len() != EXPECTED_COUNT {
        return Err(GenerationError::Shape(format!(
            "expected {EXPECTED_COUNT} tips, got {}",
            raw.len()
        )));
    }

    raw.into_iter()
        .enumerate()
        .map(|(i, t)| {
            if t.title.trim().is_empty() || t.preview.trim().is_empty() {
                Err(GenerationError::Shape(format!("tip {i} has an empty field")))
            } else {
                Ok(Tip {
                    title: t.title,
                    preview: t.preview,
                })
            }
        })
        .collect()
}

/// Parse a detail answer for `tip`: an explanation and exactly five steps.
pub fn parse_detail(tip: &Tip, text: &str) -> Result<TipDetail, GenerationError> {
    let raw: RawDetail = serde_json::from_str(&strip_code_fences(text))?;
    if raw.explanation.trim().is_empty() {
        return Err(GenerationError::Shape("empty explanation".to_string()));
    }
    if raw.steps.len() != EXPECTED_COUNT {
        return Err(GenerationError::Shape(format!(
            "expected {EXPECTED_COUNT} steps, got {}",
            raw.steps.len()
        )));
    }
    Ok(TipDetail::new(tip.clone(), raw.explanation, raw.steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FailureClass;

    const FIVE_TIPS: &str = r#"[
        {"title": "Dim the Lights", "preview": "Lower lighting an hour before bed"},
        {"title": "Keep It Cool", "preview": "Aim for a bedroom around 18C"},
        {"title": "Set a Wake Time", "preview": "Get up at the same time every day"},
        {"title": "Skip Late Caffeine", "preview": "No coffee after noon"},
        {"title": "Wind Down", "preview": "Read a paper book before sleep"}
    ]"#;

    #[test]
    fn test_strip_fences() {
        assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]");
        assert_eq!(strip_code_fences("```\n{}\n```\n"), "{}");
        assert_eq!(strip_code_fences("  [2]  "), "[2]");
        assert_eq!(strip_code_fences("a```b"), "ab");
    }

    #[test]
    fn test_parse_plain_tips() {
        let tips = parse_tips(FIVE_TIPS).unwrap();
        assert_eq!(tips.len(), 5);
        assert_eq!(tips[0].title, "Dim the Lights");
        assert_eq!(tips[4].preview, "Read a paper book before sleep");
    }

    #[test]
    fn test_parse_fenced_tips() {
        let fenced = format!("```json\n{FIVE_TIPS}\n```");
        assert_eq!(parse_tips(&fenced).unwrap(), parse_tips(FIVE_TIPS).unwrap());
    }

    #[test]
    fn test_prose_wrapper_rejected() {
        let wrapped = format!("Here are your tips:\n{FIVE_TIPS}");
        let err = parse_tips(&wrapped).unwrap_err();
        assert_eq!(err.class(), FailureClass::ResponseShape);
    }

    #[test]
    fn test_wrong_count_rejected() {
        let err = parse_tips(r#"[{"title": "Only", "preview": "one"}]"#).unwrap_err();
        assert!(err.to_string().contains("expected 5 tips, got 1"));
    }

    #[test]
    fn test_missing_field_rejected() {
        let text = FIVE_TIPS.replace(r#""preview": "No coffee after noon""#, r#""summary": "x""#);
        assert!(parse_tips(&text).is_err());
    }

    #[test]
    fn test_blank_title_rejected() {
        let text = FIVE_TIPS.replace("Keep It Cool", " ");
        assert!(parse_tips(&text).is_err());
    }

    #[test]
    fn test_parse_detail() {
        let tip = Tip::new("Dim the Lights", "Lower lighting an hour before bed");
        let text = r#"```json
        {"explanation": "Light suppresses melatonin.", "steps": ["a", "b", "c", "d", "e"]}
        ```"#;
        let detail = parse_detail(&tip, text).unwrap();
        assert_eq!(detail.tip, tip);
        assert_eq!(detail.explanation, "Light suppresses melatonin.");
        assert_eq!(detail.steps.len(), 5);
    }

    #[test]
    fn test_detail_step_count_enforced() {
        let tip = Tip::new("t", "p");
        let err = parse_detail(&tip, r#"{"explanation": "x", "steps": ["a", "b"]}"#).unwrap_err();
        assert_eq!(err.class(), FailureClass::ResponseShape);
    }
}
