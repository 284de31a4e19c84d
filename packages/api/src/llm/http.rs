//! `reqwest` transport for the messages endpoint (server only).

use std::time::Duration;

use reqwest::Client;
use store::config::LlmConfig;

use super::{CompletionTransport, GenerationError, MessagesRequest, MessagesResponse};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// HTTP transport; injects the API key when one is configured.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &LlmConfig) -> Result<Self, GenerationError> {
        let mut builder = reqwest::ClientBuilder::new();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| GenerationError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

impl CompletionTransport for HttpTransport {
    async fn complete(
        &self,
        request: &MessagesRequest,
    ) -> Result<MessagesResponse, GenerationError> {
        let mut call = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request);
        if let Some(key) = &self.api_key {
            call = call
                .header("x-api-key", key)
                .header("anthropic-version", ANTHROPIC_VERSION);
        }

        let response = call.send().await.map_err(|e| {
            if e.is_timeout() {
                GenerationError::Transport("request timed out".to_string())
            } else if e.is_connect() {
                GenerationError::Transport(format!("unable to reach {}", self.endpoint))
            } else {
                GenerationError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<MessagesResponse>()
            .await
            .map_err(|e| GenerationError::Shape(format!("response body is not JSON: {e}")))
    }
}
