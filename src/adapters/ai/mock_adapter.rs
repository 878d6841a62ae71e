//! Mock AI adapter for running without API calls.
//!
//! Returns canned replies for local development, or scripted replies for tests.
//! Every prompt it receives is recorded so callers can assert on outbound traffic.

use crate::domain::{CompletionPrompt, DomainError, PromptPurpose};
use crate::ports::CompletionPort;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::info;

/// Mock completion provider.
///
/// Scripted replies are consumed in order; once the script is empty the adapter
/// falls back to canned replies ("Yes" for classification, a placeholder for advice).
pub struct MockAiAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    script: Mutex<VecDeque<Result<String, DomainError>>>,
    calls: Mutex<Vec<CompletionPrompt>>,
}

impl MockAiAdapter {
    /// Create a new mock adapter with default delay (100ms) and canned replies.
    pub fn new() -> Self {
        Self::with_delay(100)
    }

    /// Create a mock adapter with custom delay.
    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock adapter (no delay) that answers with `replies` in order.
    pub fn scripted(replies: Vec<Result<String, DomainError>>) -> Self {
        let adapter = Self::with_delay(0);
        *lock(&adapter.script) = replies.into_iter().collect();
        adapter
    }

    /// Prompts received so far, oldest first.
    pub fn calls(&self) -> Vec<CompletionPrompt> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    fn canned_reply(prompt: &CompletionPrompt) -> String {
        match prompt.purpose {
            PromptPurpose::Classification => "Yes".to_string(),
            PromptPurpose::Advice => format!(
                "[MOCK] A sommelier would answer \"{}\" here. Configure OPENAI_API_KEY \
                 to get real advice from the provider.",
                prompt.user
            ),
        }
    }
}

impl Default for MockAiAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait::async_trait]
impl CompletionPort for MockAiAdapter {
    async fn complete(&self, prompt: &CompletionPrompt) -> Result<String, DomainError> {
        info!(
            purpose = %prompt.purpose,
            user_len = prompt.user.len(),
            "[MOCK] Simulating completion"
        );
        lock(&self.calls).push(prompt.clone());

        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        let scripted = lock(&self.script).pop_front();
        match scripted {
            Some(reply) => reply,
            None => Ok(Self::canned_reply(prompt)),
        }
    }
}
