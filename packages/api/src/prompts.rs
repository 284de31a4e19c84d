//! Prompt text sent to the text-generation endpoint.
//!
//! The wording, including the odd whitespace after the first sentence of the
//! tips prompt, matches what the model has been answering all along. Change
//! it only together with [`crate::extract`].

use store::{Profile, Tip};

/// Instruction asking for five `{title, preview}` tips for `profile`.
pub fn tips_prompt(profile: &Profile) -> String {
    format!(
        "Generate 5 concise wellness tips for a {age}-year-old {gender} focused on {goal}. \n            \nReturn ONLY valid JSON (no preamble, no markdown) in this exact format:\n[\n  {{\"title\": \"Tip Title\", \"preview\": \"One sentence preview\"}},\n  ...5 tips total\n]\n\nMake titles action-oriented and previews engaging.",
        age = profile.age,
        gender = profile.gender.id(),
        goal = profile.goal.label(),
    )
}

/// Instruction asking for an explanation and five steps for `tip`.
pub fn detail_prompt(tip: &Tip) -> String {
    format!(
        "Expand on this wellness tip: \"{title}\" - {preview}\n\nReturn ONLY valid JSON (no preamble, no markdown):\n{{\n  \"explanation\": \"2-3 sentence explanation of why this matters\",\n  \"steps\": [\"Step 1\", \"Step 2\", \"Step 3\", \"Step 4\", \"Step 5\"]\n}}\n\nMake steps specific and actionable.",
        title = tip.title,
        preview = tip.preview,
    )
}
