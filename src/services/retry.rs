//! Fixed-count, fixed-delay retry

use std::future::Future;
use std::time::Duration;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub fn new(attempts: u32, delay: Duration) -> Self {
        Self {
            attempts: attempts.max(1),
            delay,
        }
    }

    /// Run `operation` until it succeeds, fails with a non-retryable error, or the
    /// attempts are exhausted.
    pub async fn run<T, F, Fut>(&self, name: &str, mut operation: F) -> AppResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && attempt < self.attempts => {
                    tracing::warn!(
                        "{} failed (attempt {}/{}): {}",
                        name,
                        attempt,
                        self.attempts,
                        e
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_retries_server_errors_then_succeeds() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let policy = RetryPolicy::new(3, Duration::from_secs(1));

        let result = policy
            .run("lookup", move || async move {
                if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(AppError::Remote { status: 503, message: "busy".into() })
                } else {
                    Ok(7)
                }
            })
            .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_attempts() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let policy = RetryPolicy::new(2, Duration::from_millis(500));

        let result: AppResult<()> = policy
            .run("lookup", move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(AppError::Network("reset".into()))
            })
            .await;

        assert!(matches!(result, Err(AppError::Network(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_client_errors_are_not_retried() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let policy = RetryPolicy::new(5, Duration::from_secs(10));

        let result: AppResult<()> = policy
            .run("lookup", move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(AppError::Remote { status: 404, message: "none".into() })
            })
            .await;

        assert!(result.unwrap_err().is_not_found());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
