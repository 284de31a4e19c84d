//! Server configuration: `wellness.toml` plus environment overrides.

#[cfg(feature = "server")]
use std::path::PathBuf;

use store::{FailurePolicy, WellnessConfig};

/// Load the server configuration.
///
/// The file comes from `WELLNESS_CONFIG`, else `./wellness.toml` if present,
/// else defaults. `ANTHROPIC_API_KEY`, `WELLNESS_LLM_ENDPOINT`,
/// `WELLNESS_LLM_MODEL` and `WELLNESS_FAILURE_POLICY` override the file.
#[cfg(feature = "server")]
pub fn load() -> Result<WellnessConfig, String> {
    dotenvy::dotenv().ok();

    let path = std::env::var("WELLNESS_CONFIG")
        .map(PathBuf::from)
        .ok()
        .or_else(|| {
            let local = PathBuf::from(WellnessConfig::filename());
            local.exists().then_some(local)
        });

    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            WellnessConfig::from_toml(&text)
                .map_err(|e| format!("invalid {}: {e}", path.display()))?
        }
        None => WellnessConfig::default(),
    };

    apply_env(config, |name| std::env::var(name).ok())
}

/// Apply environment overrides read through `var`.
pub fn apply_env(
    mut config: WellnessConfig,
    var: impl Fn(&str) -> Option<String>,
) -> Result<WellnessConfig, String> {
    if let Some(key) = var("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty()) {
        config.llm.api_key = Some(key);
    }
    if let Some(endpoint) = var("WELLNESS_LLM_ENDPOINT") {
        config.llm.endpoint = endpoint;
    }
    if let Some(model) = var("WELLNESS_LLM_MODEL") {
        config.llm.model = model;
    }
    if let Some(policy) = var("WELLNESS_FAILURE_POLICY") {
        config.generation.failure_policy = policy.parse::<FailurePolicy>()?;
    }
    Ok(config)
}
