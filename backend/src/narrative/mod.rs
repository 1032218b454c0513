//! External narrative generator seam.
//!
//! The itinerary prose is produced by a hosted text-generation service. The
//! service is reached through the [`NarrativeGenerator`] trait so that the
//! HTTP client is constructed once at startup, injected into the request
//! handlers, and replaced by a fake in tests.

use async_trait::async_trait;

pub mod gemini;
pub mod mock;

pub use gemini::{GeminiClient, GeminiConfig};
pub use mock::{FailingNarrator, StaticNarrator};

/// Result type for narrative generation.
pub type NarrativeResult<T> = Result<T, NarrativeError>;

/// Failures of the external generator.
///
/// None of these reach the end user: the formatter converts them into a
/// fixed failure string.
#[derive(Debug, thiserror::Error)]
pub enum NarrativeError {
    #[error("No API key configured for the narrative service")]
    MissingCredentials,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Narrative service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed narrative response: {0}")]
    MalformedResponse(String),

    #[error("Narrative service returned no text")]
    EmptyResponse,
}

impl From<reqwest::Error> for NarrativeError {
    fn from(err: reqwest::Error) -> Self {
        NarrativeError::Transport(err.to_string())
    }
}

/// A text generator that turns a rendered request into prose.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Send one request and return the response text verbatim.
    async fn generate(&self, prompt: &str) -> NarrativeResult<String>;

    /// Model identifier, reported by the health endpoint.
    fn model_name(&self) -> &str;
}
