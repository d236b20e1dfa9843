use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

/// Why a completion could not be produced. Every variant is a provider-side
/// failure from the relay's point of view.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("provider rejected the credential ({0})")]
    Unauthorized(StatusCode),

    #[error("provider returned {status}")]
    Status { status: StatusCode },

    #[error("failed to decode provider response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("provider response contained no output items")]
    EmptyOutput,

    #[error("first output item contained no content segments")]
    MissingContent,

    #[error("first content segment carried no text")]
    MissingText,
}

/// Sends a single prompt to a hosted model and returns the reply text.
///
/// The relay endpoint only talks to this trait, so tests can swap in a stub
/// provider without any network access.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}
