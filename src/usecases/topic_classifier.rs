//! Topic classifier. One completion call decides whether a question is about wine or food pairing.

use crate::domain::{CompletionPrompt, DomainError, PromptPurpose, Question, Topic};
use crate::ports::CompletionPort;
use std::sync::Arc;
use tracing::info;

/// Fixed system instruction for the classification call.
pub const CLASSIFIER_INSTRUCTION: &str =
    "Determine if the following query is about wine or food pairings. Respond with 'Yes' or 'No'.";

pub struct TopicClassifier {
    ai: Arc<dyn CompletionPort>,
}

impl TopicClassifier {
    pub fn new(ai: Arc<dyn CompletionPort>) -> Self {
        Self { ai }
    }

    /// Classify `question`. Provider failures propagate unchanged as `DomainError::Provider`.
    pub async fn classify(&self, question: &Question) -> Result<Topic, DomainError> {
        let prompt = CompletionPrompt {
            purpose: PromptPurpose::Classification,
            system: CLASSIFIER_INSTRUCTION.to_string(),
            user: question.as_str().to_string(),
            temperature: None,
        };
        let reply = self.ai.complete(&prompt).await?;
        let topic = Topic::from_reply(&reply);
        info!(reply = %reply.trim(), ?topic, "question classified");
        Ok(topic)
    }
}
