//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/provider types here; adapters map to and from these.

use super::errors::{DomainError, NO_INPUT_MESSAGE};
use std::fmt;

/// A validated, non-empty question. Only constructible through [`Question::parse`].
/// Holds the caller's text exactly as sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    /// Validate raw input. Absent, empty or whitespace-only input is a `Validation` error.
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        match raw {
            Some(text) if !text.trim().is_empty() => Ok(Self(text.to_string())),
            _ => Err(DomainError::Validation(NO_INPUT_MESSAGE.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceSource {
    /// Produced by the provider for an in-domain question.
    Generated,
    /// Fixed message returned for out-of-domain questions.
    Fallback,
}

/// Answer returned verbatim to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
    pub text: String,
    pub source: AdviceSource,
}

impl Advice {
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AdviceSource::Generated,
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AdviceSource::Fallback,
        }
    }
}

/// What an outbound completion call is for. Used for logging and by the mock provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptPurpose {
    Classification,
    Advice,
}

impl fmt::Display for PromptPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptPurpose::Classification => f.write_str("classification"),
            PromptPurpose::Advice => f.write_str("advice"),
        }
    }
}

/// One outbound completion call: system instruction + user content.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionPrompt {
    pub purpose: PromptPurpose,
    pub system: String,
    pub user: String,
    /// `None` leaves the provider's default temperature in place.
    pub temperature: Option<f32>,
}
