//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod persona;
pub mod topic;

pub use entities::{Advice, AdviceSource, CompletionPrompt, PromptPurpose, Question};
pub use errors::{DomainError, NO_INPUT_MESSAGE};
pub use persona::{Persona, PersonaKind};
pub use topic::Topic;
