//! Wire types for the HTTP surface.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Body of `POST /ask`.
///
/// `question` is canonical. `query` is a deprecated alias, consulted only when `question` is absent.
#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

impl AskRequest {
    /// The question text as received, resolving the deprecated `query` alias.
    pub fn question_text(&self) -> Option<&str> {
        match (&self.question, &self.query) {
            (Some(q), _) => Some(q.as_str()),
            (None, Some(q)) => {
                warn!("request used deprecated field 'query'; send 'question' instead");
                Some(q.as_str())
            }
            (None, None) => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub advice: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
