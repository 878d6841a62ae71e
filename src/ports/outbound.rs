//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{CompletionPrompt, DomainError};

/// LLM completion provider. One call = one system instruction + one user message.
#[async_trait::async_trait]
pub trait CompletionPort: Send + Sync {
    /// Return the raw text of the first completion choice.
    ///
    /// # Errors
    /// Returns `DomainError::Provider` when the call fails, times out after retries,
    /// or the response has no usable choice.
    async fn complete(&self, prompt: &CompletionPrompt) -> Result<String, DomainError>;
}
