//! Built-in content used when generation fails.

use store::{Tip, TipDetail};

const FALLBACK_TIPS: [(&str, &str); 5] = [
    (
        "Start with Morning Hydration",
        "Drink water within 30 minutes of waking to boost metabolism",
    ),
    (
        "Practice Mindful Eating",
        "Slow down and savor each bite to improve digestion",
    ),
    (
        "Move Every Hour",
        "Set reminders for brief movement breaks throughout the day",
    ),
    (
        "Create a Sleep Sanctuary",
        "Optimize your bedroom environment for better rest",
    ),
    (
        "Build a Gratitude Practice",
        "Journal three things you're grateful for each evening",
    ),
];

const FALLBACK_EXPLANATION: &str = "This wellness practice can significantly improve your health and wellbeing when incorporated consistently into your daily routine.";

const FALLBACK_STEPS: [&str; 5] = [
    "Start small and build the habit gradually",
    "Set a specific time each day for this practice",
    "Track your progress in a journal or app",
    "Adjust based on how your body responds",
    "Celebrate small wins along the way",
];

/// The fixed five tips.
pub fn fallback_tips() -> Vec<Tip> {
    FALLBACK_TIPS
        .iter()
        .map(|(title, preview)| Tip::new(title, preview))
        .collect()
}

/// Generic explanation and steps, attached to `tip`.
pub fn fallback_detail(tip: &Tip) -> TipDetail {
    TipDetail::new(
        tip.clone(),
        FALLBACK_EXPLANATION.to_string(),
        FALLBACK_STEPS.iter().map(|s| s.to_string()).collect(),
    )
}
