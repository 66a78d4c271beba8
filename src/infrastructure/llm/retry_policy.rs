use std::future::Future;
use std::time::Duration;

use crate::application::ports::LlmClientError;

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

/// Immutable retry configuration for one outbound client.
///
/// `max_retries` counts retries after the initial attempt, so the default of
/// 3 allows 4 attempts. Before retry `n` the caller waits `n * base_delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    pub const fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Single attempt, never retries.
    pub const fn none() -> Self {
        Self::new(0, Duration::ZERO)
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Linear backoff; `retry` is 1-based.
    pub fn delay_before_retry(&self, retry: u32) -> Duration {
        self.base_delay * retry
    }

    pub fn should_retry(&self, error: &LlmClientError, retries_done: u32) -> bool {
        retries_done < self.max_retries && error.is_transient()
    }

    /// Total wait incurred when `retries` retries happen.
    pub fn total_delay(&self, retries: u32) -> Duration {
        (1..=retries).map(|n| self.delay_before_retry(n)).sum()
    }

    /// Runs `operation` until it succeeds, fails with a non-transient error, or
    /// the retry budget is spent. Attempts are sequential; the closure gets the
    /// 1-based attempt number.
    pub async fn run<T, F, Fut>(&self, mut operation: F) -> Result<T, LlmClientError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, LlmClientError>>,
    {
        let mut retries_done = 0;
        loop {
            let attempt = retries_done + 1;
            match operation(attempt).await {
                Ok(value) => return Ok(value),
                Err(error) if self.should_retry(&error, retries_done) => {
                    retries_done += 1;
                    let delay = self.delay_before_retry(retries_done);
                    tracing::warn!(
                        attempt,
                        retry = retries_done,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "Transient upstream failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(error) => {
                    if error.is_transient() {
                        tracing::error!(attempts = attempt, error = %error, "Retries exhausted");
                    }
                    return Err(error);
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES, DEFAULT_BASE_DELAY)
    }
}
