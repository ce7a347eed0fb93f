//! Completion client abstraction.

use async_trait::async_trait;

use crate::credential::Credential;
use crate::error::CompletionError;

/// Trait for requesting a single completion.
///
/// This abstraction allows mocking the network call in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` as the only user message and return the first candidate's text.
    ///
    /// A candidate without text yields an empty string rather than an error.
    async fn complete(&self, prompt: &str, credential: &Credential)
    -> Result<String, CompletionError>;
}
