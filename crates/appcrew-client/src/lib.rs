pub mod anthropic;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

pub use anthropic::{AnthropicBackend, DEFAULT_MODEL};
pub use mock::MockBackend;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("empty response from model")]
    EmptyResponse,
}

/// Trait for model completion backends.
///
/// Each backend encapsulates how a rendered prompt becomes model text:
/// endpoint, auth, and response unwrapping. It does NOT handle prompt
/// assembly (appcrew-prompts) or output extraction (appcrew-core).
///
/// One attempt per call, no retry; failures propagate to the pipeline,
/// which aborts the remaining stages.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Human-readable backend name for logging.
    fn name(&self) -> &str;

    /// Optional model hint for logging/display purposes.
    fn model_hint(&self) -> Option<&str> {
        None
    }

    /// Send one prompt as a single user message and return the first text
    /// segment of the response verbatim.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, ClientError>;
}
