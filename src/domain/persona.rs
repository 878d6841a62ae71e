//! Persona: system prompt + sampling temperature that shape generated advice.
//!
//! Selected once at startup; never mutated per request.

use super::errors::DomainError;
use std::fmt;
use std::str::FromStr;

const EXPERT_PROMPT: &str = "You are a wine expert specializing in providing wine advice and food pairing recommendations.";

const HOST_PROMPT: &str = "You are a warm, knowledgeable tasting-room host. Answer wine and food pairing \
questions in a friendly, conversational tone and explain your reasoning in plain language.";

const STOREFRONT_PROMPT: &str = "You are the sommelier for Free the Cork, an online wine shop. Give short, \
practical wine and food pairing advice and suggest bottle styles a shopper could look for.";

/// Built-in persona choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersonaKind {
    #[default]
    Expert,
    Host,
    Storefront,
}

impl PersonaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PersonaKind::Expert => "expert",
            PersonaKind::Host => "host",
            PersonaKind::Storefront => "storefront",
        }
    }
}

impl fmt::Display for PersonaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonaKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expert" => Ok(PersonaKind::Expert),
            "host" => Ok(PersonaKind::Host),
            "storefront" => Ok(PersonaKind::Storefront),
            other => Err(DomainError::Unexpected(format!(
                "unknown persona '{}' (expected expert, host or storefront)",
                other
            ))),
        }
    }
}

/// Immutable persona configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Persona {
    pub kind: PersonaKind,
    pub system_prompt: String,
    /// `None` = provider default temperature.
    pub temperature: Option<f32>,
}

impl Persona {
    pub fn builtin(kind: PersonaKind) -> Self {
        let (system_prompt, temperature) = match kind {
            PersonaKind::Expert => (EXPERT_PROMPT, None),
            PersonaKind::Host => (HOST_PROMPT, Some(0.7)),
            PersonaKind::Storefront => (STOREFRONT_PROMPT, Some(0.8)),
        };
        Self {
            kind,
            system_prompt: system_prompt.to_string(),
            temperature,
        }
    }

    /// Replace the built-in system prompt, keeping the kind's temperature.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }
}

impl Default for Persona {
    fn default() -> Self {
        Self::builtin(PersonaKind::default())
    }
}
