//! # Domain models for profiles and tips
//!
//! These types cross the server/client boundary via Dioxus server functions,
//! so all of them are `Serialize + Deserialize`.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`ProfileDraft`] | The profile form while the user is still filling it in. Any field may be blank. |
//! | [`Profile`] | A complete profile, the only thing that is ever sent for generation. |
//! | [`Gender`] / [`Goal`] | Closed choices offered by the profile form. Serialised as kebab-case ids. |
//! | [`Tip`] | A generated recommendation: a short `title` and a one-sentence `preview`. |
//! | [`TipDetail`] | A tip expanded with an `explanation` and a list of `steps`. |
//! | [`TipId`] | SHA-1 of title and preview; stable key for rendering lists. |
//! | [`SavedTip`] | A bookmarked tip, carrying its detail and list position when it was saved from the detail screen. |
//!
//! Saved-tip membership is decided by title alone (see [`crate::SavedTips`]).
//! [`TipId`] is never persisted.

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

/// Gender choices offered by the profile form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    NonBinary,
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::NonBinary,
        Gender::PreferNotToSay,
    ];

    /// Wire id, also the word embedded in the tips prompt.
    pub fn id(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::NonBinary => "non-binary",
            Gender::PreferNotToSay => "prefer-not-to-say",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-binary",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.id() == id)
    }
}

/// Wellness goals offered by the profile form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    Weight,
    Nutrition,
    Mental,
    Fitness,
    Sleep,
}

impl Goal {
    pub const ALL: [Goal; 5] = [
        Goal::Weight,
        Goal::Nutrition,
        Goal::Mental,
        Goal::Fitness,
        Goal::Sleep,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Goal::Weight => "weight",
            Goal::Nutrition => "nutrition",
            Goal::Mental => "mental",
            Goal::Fitness => "fitness",
            Goal::Sleep => "sleep",
        }
    }

    /// Human-readable label; embedded verbatim in the tips prompt.
    pub fn label(self) -> &'static str {
        match self {
            Goal::Weight => "Weight Management",
            Goal::Nutrition => "Better Nutrition",
            Goal::Mental => "Mental Wellness",
            Goal::Fitness => "Build Fitness",
            Goal::Sleep => "Improve Sleep",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.id() == id)
    }
}

/// A complete profile. Age is kept as entered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub age: String,
    pub gender: Gender,
    pub goal: Goal,
}

/// Profile form state before submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub age: String,
    pub gender: Option<Gender>,
    pub goal: Option<Goal>,
}

impl ProfileDraft {
    /// The submittable profile, or `None` while any field is blank.
    pub fn complete(&self) -> Option<Profile> {
        let age = self.age.trim();
        if age.is_empty() {
            return None;
        }
        Some(Profile {
            age: age.to_string(),
            gender: self.gender?,
            goal: self.goal?,
        })
    }
}

/// A single generated tip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub title: String,
    pub preview: String,
}

impl Tip {
    pub fn new(title: &str, preview: &str) -> Self {
        Self {
            title: title.to_string(),
            preview: preview.to_string(),
        }
    }

    pub fn id(&self) -> TipId {
        TipId::of(&self.title, &self.preview)
    }

    /// Saved-set identity.
    pub fn same_title(&self, other: &Tip) -> bool {
        self.title == other.title
    }
}

/// A tip expanded with its rationale and steps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipDetail {
    #[serde(flatten)]
    pub tip: Tip,
    pub explanation: String,
    pub steps: Vec<String>,
}

impl TipDetail {
    pub fn new(tip: Tip, explanation: String, steps: Vec<String>) -> Self {
        Self {
            tip,
            explanation,
            steps,
        }
    }
}

/// A bookmarked tip as stored.
///
/// `explanation`, `steps` and `index` are present when the tip was saved with
/// its detail open; they are omitted from the stored record otherwise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTip {
    #[serde(flatten)]
    pub tip: Tip,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<String>>,
}

impl SavedTip {
    /// Keep the detail alongside the tip.
    pub fn with_detail(detail: &TipDetail, index: usize) -> Self {
        Self {
            tip: detail.tip.clone(),
            index: Some(index),
            explanation: Some(detail.explanation.clone()),
            steps: Some(detail.steps.clone()),
        }
    }
}

impl From<Tip> for SavedTip {
    fn from(tip: Tip) -> Self {
        Self {
            tip,
            index: None,
            explanation: None,
            steps: None,
        }
    }
}

/// Hex SHA-1 of `title + "\n" + preview`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TipId(String);

impl TipId {
    pub fn of(title: &str, preview: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(title.as_bytes());
        hasher.update(b"\n");
        hasher.update(preview.as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TipId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_requires_every_field() {
        let mut draft = ProfileDraft::default();
        assert!(draft.complete().is_none());

        draft.age = "29".to_string();
        draft.gender = Some(Gender::Female);
        assert!(draft.complete().is_none());

        draft.goal = Some(Goal::Sleep);
        let profile = draft.complete().unwrap();
        assert_eq!(profile.age, "29");
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.goal, Goal::Sleep);
    }

    #[test]
    fn test_blank_age_is_incomplete() {
        let draft = ProfileDraft {
            age: "   ".to_string(),
            gender: Some(Gender::Male),
            goal: Some(Goal::Fitness),
        };
        assert!(draft.complete().is_none());
    }

    #[test]
    fn test_ids_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Gender::PreferNotToSay).unwrap(),
            "\"prefer-not-to-say\""
        );
        assert_eq!(serde_json::to_string(&Gender::NonBinary).unwrap(), "\"non-binary\"");
        assert_eq!(serde_json::to_string(&Goal::Mental).unwrap(), "\"mental\"");
        for g in Gender::ALL {
            assert_eq!(Gender::from_id(g.id()), Some(g));
        }
        for g in Goal::ALL {
            assert_eq!(Goal::from_id(g.id()), Some(g));
        }
        assert_eq!(Goal::from_id("wealth"), None);
    }

    #[test]
    fn test_goal_labels() {
        assert_eq!(Goal::Weight.label(), "Weight Management");
        assert_eq!(Goal::Sleep.label(), "Improve Sleep");
    }

    #[test]
    fn test_detail_serialises_flat() {
        let detail = TipDetail::new(
            Tip::new("Walk", "Every day"),
            "Because.".to_string(),
            vec!["one".to_string()],
        );
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["title"], "Walk");
        assert_eq!(value["preview"], "Every day");
        assert_eq!(value["steps"][0], "one");
    }

    #[test]
    fn test_tip_id_is_stable_and_content_sensitive() {
        let a = Tip::new("Walk", "Every day");
        let b = Tip::new("Walk", "Every other day");
        assert_eq!(a.id(), Tip::new("Walk", "Every day").id());
        assert_ne!(a.id(), b.id());
        assert_eq!(a.id().as_str().len(), 40);
        assert!(a.same_title(&b));
    }

    #[test]
    fn test_tip_id_is_lowercase_hex_sha1() {
        let id = Tip::new("Start with Morning Hydration", "Drink water").id();
        assert_eq!(id.as_str(), "abd13760ceede1bafb5f0df71a521d0f88a66b44");
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn test_saved_tip_omits_absent_detail() {
        let plain = SavedTip::from(Tip::new("Walk", "Every day"));
        let value = serde_json::to_value(&plain).unwrap();
        assert_eq!(value, serde_json::json!({"title": "Walk", "preview": "Every day"}));

        let detail = TipDetail::new(
            Tip::new("Walk", "Every day"),
            "Because.".to_string(),
            vec!["one".to_string(), "two".to_string()],
        );
        let full = serde_json::to_value(SavedTip::with_detail(&detail, 3)).unwrap();
        assert_eq!(full["index"], 3);
        assert_eq!(full["explanation"], "Because.");
        assert_eq!(full["steps"][1], "two");
    }
}
