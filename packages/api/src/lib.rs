//! # API crate: tip generation and the server functions that expose it
//!
//! The browser never talks to the text-generation endpoint directly. It calls
//! the two Dioxus server functions defined here; the server builds the
//! prompt, injects the API key, calls the endpoint and applies the configured
//! [`FailurePolicy`].
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`config`] | none | `wellness.toml` + environment overrides (loading is `server` only) |
//! | [`extract`] | none | Code-fence stripping and shape-checked JSON parsing of model output |
//! | [`fallback`] | none | The built-in tips and detail used when generation fails |
//! | [`generator`] | none | [`TipGenerator`]: the tip generation and tip detail clients |
//! | [`llm`] | `HttpTransport` is `server` only | Wire types, [`CompletionTransport`], [`GenerationError`] |
//! | [`prompts`] | none | Prompt text |
//!
//! ## Server functions exposed here
//!
//! - `generate_tips`: `POST /api/tips/generate`
//! - `generate_detail`: `POST /api/tips/detail`
//!
//! Both answer with a [`Reply`]. Under the default policy it is always
//! `Ready`; with `propagate` a failed generation comes back as
//! `Reply::Failed`. A `ServerFnError` means the call itself went wrong.

use dioxus::prelude::*;

pub mod config;
pub mod extract;
pub mod fallback;
pub mod generator;
pub mod llm;
pub mod prompts;

pub use generator::{Generated, Reply, TipGenerator};
pub use llm::{CompletionTransport, FailureClass, GenerationError};
pub use store::{FailurePolicy, Gender, Goal, Profile, Tip, TipDetail};

#[cfg(feature = "server")]
static GENERATOR: tokio::sync::OnceCell<TipGenerator<llm::HttpTransport>> =
    tokio::sync::OnceCell::const_new();

/// Get or initialise the process-wide generator from the server config.
#[cfg(feature = "server")]
async fn server_generator() -> Result<&'static TipGenerator<llm::HttpTransport>, ServerFnError> {
    GENERATOR
        .get_or_try_init(|| async {
            let config = config::load()?;
            let transport = llm::HttpTransport::new(&config.llm).map_err(|e| e.to_string())?;
            if config.llm.api_key.is_none() {
                tracing::warn!("ANTHROPIC_API_KEY not set; requests go out without credentials");
            }
            tracing::info!(
                model = %config.llm.model,
                policy = ?config.generation.failure_policy,
                "tip generator ready"
            );
            Ok::<_, String>(TipGenerator::new(
                transport,
                &config.llm,
                config.generation.failure_policy,
            ))
        })
        .await
        .map_err(|e| ServerFnError::new(e))
}

/// Generate five tips for a complete profile.
#[cfg(feature = "server")]
#[post("/api/tips/generate")]
pub async fn generate_tips(profile: Profile) -> Result<Reply<Vec<Tip>>, ServerFnError> {
    let generator = server_generator().await?;
    Ok(generator.generate_tips(&profile).await.into())
}

#[cfg(not(feature = "server"))]
#[post("/api/tips/generate")]
pub async fn generate_tips(profile: Profile) -> Result<Reply<Vec<Tip>>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Expand one tip into an explanation and five steps.
#[cfg(feature = "server")]
#[post("/api/tips/detail")]
pub async fn generate_detail(tip: Tip) -> Result<Reply<TipDetail>, ServerFnError> {
    let generator = server_generator().await?;
    Ok(generator.generate_detail(&tip).await.into())
}

#[cfg(not(feature = "server"))]
#[post("/api/tips/detail")]
pub async fn generate_detail(tip: Tip) -> Result<Reply<TipDetail>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
