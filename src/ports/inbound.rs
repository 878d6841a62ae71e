//! Inbound port. HTTP adapter calls into the application.

use crate::domain::{Advice, DomainError};

/// Input port: the HTTP layer hands over the raw question and gets an answer back.
#[async_trait::async_trait]
pub trait AdvicePort: Send + Sync {
    /// Run validate → classify → answer for one request.
    ///
    /// `raw_question` is the question field as received; `None` when absent.
    async fn advise(&self, raw_question: Option<&str>) -> Result<Advice, DomainError>;
}
