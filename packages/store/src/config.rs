//! # Application configuration: `wellness.toml`
//!
//! Defines the TOML configuration read by the server at start-up
//! (filename: [`WellnessConfig::filename`] = `"wellness.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [llm]
//! endpoint = "https://api.anthropic.com/v1/messages"
//! model = "claude-sonnet-4-20250514"
//! max_tokens = 1000
//! # timeout_secs = 30          # unset: platform default
//!
//! [generation]
//! failure_policy = "use-defaults"   # or "propagate"
//!
//! [storage]
//! saved_tips_key = "savedTips"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`WellnessConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`LlmConfig`] | Remote text-generation endpoint, model id, token budget, optional timeout. |
//! | [`GenerationConfig`] | What to do when a generation call fails ([`FailurePolicy`]). |
//! | [`StorageConfig`] | Key the saved-tip list is stored under. |
//!
//! All structs derive `Default` so that a missing or empty config file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::shelf::SAVED_TIPS_KEY;

pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Top-level configuration stored in `wellness.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WellnessConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Remote text-generation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout. `None` leaves the HTTP client's default in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    /// Never read from the file; injected from the environment.
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: None,
            api_key: None,
        }
    }
}

/// What a generation client does when the remote call or parsing fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Substitute the built-in fallback content.
    #[default]
    UseDefaults,
    /// Return the error to the caller.
    Propagate,
}

impl std::str::FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "use-defaults" => Ok(FailurePolicy::UseDefaults),
            "propagate" => Ok(FailurePolicy::Propagate),
            other => Err(format!("unknown failure policy: {other}")),
        }
    }
}

/// Generation behaviour.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

/// Persistence settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_saved_tips_key")]
    pub saved_tips_key: String,
}

fn default_saved_tips_key() -> String {
    SAVED_TIPS_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            saved_tips_key: default_saved_tips_key(),
        }
    }
}

impl WellnessConfig {
    /// Builder method to set the failure policy.
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.generation.failure_policy = policy;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "wellness.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
