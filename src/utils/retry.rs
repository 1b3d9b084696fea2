use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Fixed-delay retry. `max_attempts == None` retries forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub delay: Duration,
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Duration::from_secs(5), None)
    }
}

impl RetryPolicy {
    pub fn new(delay: Duration, max_attempts: Option<u32>) -> Self {
        Self {
            delay,
            max_attempts: max_attempts.map(|n| n.max(1)),
        }
    }

    /// Runs `op` until it succeeds or the attempt budget is spent. The
    /// closure receives the 1-based attempt number. On exhaustion the last
    /// error is returned.
    pub async fn run<F, Fut, T, E>(&self, task: &str, mut op: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut attempt: u32 = 1;
        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if self.max_attempts.is_some_and(|max| attempt >= max) {
                        tracing::error!(
                            task,
                            attempt,
                            error = %err,
                            "giving up after final attempt"
                        );
                        return Err(err);
                    }
                    tracing::warn!(
                        task,
                        attempt,
                        error = %err,
                        "attempt failed, retrying after {:?}",
                        self.delay
                    );
                    tokio::time::sleep(self.delay).await;
                    attempt = attempt.saturating_add(1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    fn quick(max_attempts: Option<u32>) -> RetryPolicy {
        RetryPolicy::new(Duration::from_millis(1), max_attempts)
    }

    #[tokio::test]
    async fn succeeds_after_transient_failures() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result: Result<u32, String> = quick(None)
            .run("test", |attempt| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    if attempt < 3 {
                        Err(format!("boom {}", attempt))
                    } else {
                        Ok(attempt)
                    }
                }
            })
            .await;
        assert_eq!(result, Ok(3));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn stops_at_max_attempts_with_last_error() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let result: Result<(), String> = quick(Some(4))
            .run("test", |attempt| {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err(format!("fail {}", attempt))
                }
            })
            .await;
        assert_eq!(result, Err("fail 4".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn zero_max_attempts_still_tries_once() {
        assert_eq!(quick(Some(0)).max_attempts, Some(1));
        assert_eq!(RetryPolicy::default().delay, Duration::from_secs(5));
        assert_eq!(RetryPolicy::default().max_attempts, None);
    }
}
