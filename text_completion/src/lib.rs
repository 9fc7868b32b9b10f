//! An interface for handling text completion requests
//!
//! This crate provides a `CompletionHandler` trait that sends one prompt to a
//! text completion backend, and the grade-level logic built on top of it:
//! prompt templates per `AudienceTier` and the two-tier aggregation.

mod explain;
pub use explain::{explain_both, explain_tier, explain_tier_or_sentinel, CombinedResult, TierResponse};
mod prompt;
pub use prompt::build_prompt;
mod tier;
pub use tier::AudienceTier;

use async_trait::async_trait;
use thiserror::Error;

/// Errors returned by a completion backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// The request never reached the backend, or its body could not be read.
    #[error("Error sending request: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The backend answered successfully but without any usable text.
    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}

impl CompletionError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, CompletionError::Api { status: 429, .. })
    }
}

//Shared as `Arc<dyn CompletionHandler>` by the web and console frontends,
//so the openai code stays out of both.
#[async_trait]
pub trait CompletionHandler: Send + Sync {
    /// Sends `prompt` as a single user message and returns the answer text.
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}
