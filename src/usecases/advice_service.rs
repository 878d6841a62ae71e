//! Advice service. Orchestrates validate → classify → answer for one request.
//!
//! Stateless: everything it holds is read-only and shared across concurrent requests.

use crate::domain::{Advice, DomainError, Question};
use crate::ports::AdvicePort;
use crate::usecases::{AdviceGenerator, TopicClassifier};
use tracing::{error, info};

/// Answer returned for questions the classifier rejects.
pub const DEFAULT_FALLBACK_ADVICE: &str = "I'm sorry, I can only help with questions about wine \
and food pairings. Try asking me what to pour with your next meal!";

/// Gateway orchestrator.
///
/// Flow per request:
/// 1. Validate the question (no provider call on failure)
/// 2. Classify it, when a classifier is configured
/// 3. Out-of-domain → fixed fallback, no advice call
/// 4. In-domain or unclassified → one advice call
pub struct AdviceService {
    classifier: Option<TopicClassifier>,
    generator: AdviceGenerator,
    fallback: String,
}

impl AdviceService {
    /// Create a new advice service.
    ///
    /// # Arguments
    /// * `classifier` - Topic classifier; `None` disables the classification stage
    /// * `generator` - Advice generator bound to the startup persona
    /// * `fallback` - Answer for out-of-domain questions
    pub fn new(
        classifier: Option<TopicClassifier>,
        generator: AdviceGenerator,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            classifier,
            generator,
            fallback: fallback.into(),
        }
    }

    pub fn classification_enabled(&self) -> bool {
        self.classifier.is_some()
    }

    async fn answer(&self, question: &Question) -> Result<Advice, DomainError> {
        if let Some(classifier) = &self.classifier {
            let topic = classifier.classify(question).await?;
            if !topic.is_in_domain() {
                info!(question = %question, "out-of-domain question, returning fallback");
                return Ok(Advice::fallback(self.fallback.clone()));
            }
        }
        self.generator.generate(question).await
    }
}

#[async_trait::async_trait]
impl AdvicePort for AdviceService {
    async fn advise(&self, raw_question: Option<&str>) -> Result<Advice, DomainError> {
        let question = Question::parse(raw_question).inspect_err(|_| {
            error!("No input provided");
        })?;
        info!(
            question = %question,
            persona = %self.generator.persona().kind,
            "Received query"
        );

        self.answer(&question).await.inspect_err(|e| {
            error!(error = %e, "Error occurred");
        })
    }
}
