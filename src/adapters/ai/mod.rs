//! AI adapter module. Implements CompletionPort for LLM integration.
//!
//! Provides OpenAI-compatible adapter and mock adapter for development and tests.

pub mod mock_adapter;
pub mod openai_adapter;
pub mod retry;

pub use mock_adapter::MockAiAdapter;
pub use openai_adapter::OpenAiAdapter;
pub use retry::{AttemptError, RetryPolicy};
