//! Bounded retry for outbound provider calls.
//!
//! Only transient failures are retried; everything surfaces as `DomainError::Provider`
//! once attempts are exhausted.

use crate::domain::DomainError;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// How many extra attempts a transient failure earns, and how long to wait between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            delay: Duration::from_millis(250),
        }
    }
}

/// Outcome of a single attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    /// Connect failure, timeout, 429 or 5xx. Worth another try.
    Transient(String),
    /// Anything a retry cannot fix (auth, bad request, malformed body).
    Fatal(String),
}

impl RetryPolicy {
    /// Run `op` until it succeeds, fails fatally, or retries run out.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, DomainError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AttemptError>>,
    {
        let mut attempt = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(AttemptError::Fatal(msg)) => return Err(DomainError::Provider(msg)),
                Err(AttemptError::Transient(msg)) if attempt < self.max_retries => {
                    warn!(
                        attempt = attempt + 1,
                        max_retries = self.max_retries,
                        error = %msg,
                        "transient provider failure, retrying"
                    );
                    if !self.delay.is_zero() {
                        tokio::time::sleep(self.delay).await;
                    }
                    attempt += 1;
                }
                Err(AttemptError::Transient(msg)) => {
                    return Err(DomainError::Provider(format!(
                        "{} (after {} attempts)",
                        msg,
                        attempt + 1
                    )));
                }
            }
        }
    }
}
