//! Advice generator. Persona-flavored answer from a single completion call.

use crate::domain::{Advice, CompletionPrompt, DomainError, Persona, PromptPurpose, Question};
use crate::ports::CompletionPort;
use std::sync::Arc;
use tracing::info;

pub struct AdviceGenerator {
    ai: Arc<dyn CompletionPort>,
    persona: Persona,
}

impl AdviceGenerator {
    pub fn new(ai: Arc<dyn CompletionPort>, persona: Persona) -> Self {
        Self { ai, persona }
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Ask the provider for advice and return the trimmed text.
    ///
    /// An answer that is empty after trimming counts as an unexpected provider shape.
    pub async fn generate(&self, question: &Question) -> Result<Advice, DomainError> {
        let prompt = CompletionPrompt {
            purpose: PromptPurpose::Advice,
            system: self.persona.system_prompt.clone(),
            user: question.as_str().to_string(),
            temperature: self.persona.temperature,
        };
        let raw = self.ai.complete(&prompt).await?;
        let text = raw.trim();
        if text.is_empty() {
            return Err(DomainError::Provider(
                "Provider returned empty advice".to_string(),
            ));
        }

        info!(advice = %text, "Generated advice");
        Ok(Advice::generated(text))
    }
}
