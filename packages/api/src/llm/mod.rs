//! # Text-generation transport
//!
//! Wire types for the messages endpoint plus the [`CompletionTransport`] seam
//! the generator talks through. The real transport ([`HttpTransport`], server
//! only) posts JSON with `reqwest`; tests plug in their own implementation.
//!
//! ## Request / response shape
//!
//! ```json
//! // request
//! {"model": "...", "max_tokens": 1000, "messages": [{"role": "user", "content": "..."}]}
//! // response (only content[0].text is read)
//! {"content": [{"type": "text", "text": "..."}]}
//! ```

use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
mod http;
#[cfg(feature = "server")]
pub use http::HttpTransport;

/// Broad failure class reported alongside fallback content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureClass {
    /// Endpoint unreachable, timed out, or answered with a non-2xx status.
    Transport,
    /// The answer was not the JSON shape that was asked for.
    ResponseShape,
}

impl std::fmt::Display for FailureClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureClass::Transport => f.write_str("transport failure"),
            FailureClass::ResponseShape => f.write_str("response shape failure"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("endpoint returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response: {0}")]
    Shape(String),
}

impl GenerationError {
    pub fn class(&self) -> FailureClass {
        match self {
            GenerationError::Transport(_) | GenerationError::Status { .. } => {
                FailureClass::Transport
            }
            GenerationError::Shape(_) => FailureClass::ResponseShape,
        }
    }
}

impl From<serde_json::Error> for GenerationError {
    fn from(e: serde_json::Error) -> Self {
        GenerationError::Shape(e.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Body posted to the messages endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

impl MessagesRequest {
    /// A single-turn request carrying `prompt` as the user message.
    pub fn single_turn(model: &str, max_tokens: u32, prompt: String) -> Self {
        Self {
            model: model.to_string(),
            max_tokens,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt,
            }],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: Option<String>,
}

/// Body returned by the messages endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessagesResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl MessagesResponse {
    /// Build a response carrying a single text block.
    pub fn from_text(text: &str) -> Self {
        Self {
            content: vec![ContentBlock {
                text: Some(text.to_string()),
            }],
        }
    }

    /// `content[0].text`.
    pub fn first_text(&self) -> Result<&str, GenerationError> {
        self.content
            .first()
            .and_then(|block| block.text.as_deref())
            .ok_or_else(|| GenerationError::Shape("response has no text content".to_string()))
    }
}

/// Sends one request to a text-generation endpoint.
pub trait CompletionTransport {
    fn complete(
        &self,
        request: &MessagesRequest,
    ) -> impl std::future::Future<Output = Result<MessagesResponse, GenerationError>> + Send;
}
