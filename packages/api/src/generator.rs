//! # Tip generation and tip detail clients
//!
//! [`TipGenerator`] turns a [`Profile`] into five tips and a [`Tip`] into a
//! [`TipDetail`] by prompting a text-generation endpoint through a
//! [`CompletionTransport`].
//!
//! Both calls follow the same pipeline: build the prompt, send one request,
//! take `content[0].text`, strip code fences, parse and shape-check the JSON.
//! There are no retries.
//!
//! ## Failure policy
//!
//! | [`FailurePolicy`] | On transport or shape failure |
//! |---|---|
//! | `UseDefaults` (default) | Log the failure class, return the built-in content with [`Generated::fallback`] set. Never `Err`. |
//! | `Propagate` | Return the [`GenerationError`]. |
//!
//! Across the server-function boundary the outcome travels as a [`Reply`], so
//! the UI can tell a failure the server chose to report apart from a call
//! that never reached it.

use serde::{Deserialize, Serialize};
use store::config::LlmConfig;
use store::{FailurePolicy, Profile, Tip, TipDetail};

use crate::extract::{parse_detail, parse_tips};
use crate::fallback::{fallback_detail, fallback_tips};
use crate::llm::{CompletionTransport, FailureClass, GenerationError, MessagesRequest};
use crate::prompts::{detail_prompt, tips_prompt};

/// A generated value, plus the failure class if it is fallback content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Generated<T> {
    pub value: T,
    #[serde(default)]
    pub fallback: Option<FailureClass>,
}

impl<T> Generated<T> {
    pub fn fresh(value: T) -> Self {
        Self {
            value,
            fallback: None,
        }
    }

    pub fn substituted(value: T, class: FailureClass) -> Self {
        Self {
            value,
            fallback: Some(class),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Server-function payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Reply<T> {
    /// Generated, or built-in content substituted under `UseDefaults`.
    Ready(Generated<T>),
    /// Generation failed and the server propagates failures.
    Failed { class: FailureClass, message: String },
}

impl<T> From<Result<Generated<T>, GenerationError>> for Reply<T> {
    fn from(result: Result<Generated<T>, GenerationError>) -> Self {
        match result {
            Ok(generated) => Reply::Ready(generated),
            Err(e) => Reply::Failed {
                class: e.class(),
                message: e.to_string(),
            },
        }
    }
}

/// Prompt-based tip and detail generation over a transport.
pub struct TipGenerator<T: CompletionTransport> {
    transport: T,
    model: String,
    max_tokens: u32,
    policy: FailurePolicy,
}

impl<T: CompletionTransport> TipGenerator<T> {
    pub fn new(transport: T, llm: &LlmConfig, policy: FailurePolicy) -> Self {
        Self {
            transport,
            model: llm.model.clone(),
            max_tokens: llm.max_tokens,
            policy,
        }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Send `prompt` and return the first text block of the answer.
    async fn ask(&self, prompt: String) -> Result<String, GenerationError> {
        let request = MessagesRequest::single_turn(&self.model, self.max_tokens, prompt);
        let response = self.transport.complete(&request).await?;
        Ok(response.first_text()?.to_string())
    }

    async fn try_tips(&self, profile: &Profile) -> Result<Vec<Tip>, GenerationError> {
        let text = self.ask(tips_prompt(profile)).await?;
        parse_tips(&text)
    }

    async fn try_detail(&self, tip: &Tip) -> Result<TipDetail, GenerationError> {
        let text = self.ask(detail_prompt(tip)).await?;
        parse_detail(tip, &text)
    }

    /// Five tips for `profile`.
    pub async fn generate_tips(
        &self,
        profile: &Profile,
    ) -> Result<Generated<Vec<Tip>>, GenerationError> {
        tracing::debug!(goal = profile.goal.id(), "generating tips");
        match self.try_tips(profile).await {
            Ok(tips) => Ok(Generated::fresh(tips)),
            Err(e) => self.recover(e, "tips", fallback_tips),
        }
    }

    /// Explanation and five steps for `tip`.
    pub async fn generate_detail(
        &self,
        tip: &Tip,
    ) -> Result<Generated<TipDetail>, GenerationError> {
        tracing::debug!(title = %tip.title, "generating tip detail");
        match self.try_detail(tip).await {
            Ok(detail) => Ok(Generated::fresh(detail)),
            Err(e) => self.recover(e, "detail", || fallback_detail(tip)),
        }
    }

    fn recover<V>(
        &self,
        error: GenerationError,
        what: &str,
        defaults: impl FnOnce() -> V,
    ) -> Result<Generated<V>, GenerationError> {
        let class = error.class();
        match self.policy {
            FailurePolicy::UseDefaults => {
                tracing::warn!(%class, "{what} generation failed, using built-in content: {error}");
                Ok(Generated::substituted(defaults(), class))
            }
            FailurePolicy::Propagate => {
                tracing::warn!(%class, "{what} generation failed: {error}");
                Err(error)
            }
        }
    }
}
