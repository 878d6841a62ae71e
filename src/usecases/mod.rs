//! Application use cases. Orchestrate domain logic via ports.

pub mod advice_generator;
pub mod advice_service;
pub mod topic_classifier;

pub use advice_generator::AdviceGenerator;
pub use advice_service::{AdviceService, DEFAULT_FALLBACK_ADVICE};
pub use topic_classifier::{CLASSIFIER_INSTRUCTION, TopicClassifier};
