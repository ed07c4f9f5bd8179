extern crate log;
extern crate tokio;

use crate::config::retry::{RETRY_BASE_DELAY, RETRY_COUNT};
use log::debug;
use std::{fmt, future::Future, result::Result as StdResult, time::Duration};
use tokio::time::sleep;

pub struct RetryPolicy {
    attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    pub const fn new(attempts: u32, base_delay: Duration) -> Self {
        Self {
            attempts,
            base_delay,
        }
    }
    pub async fn run<F, U, Out, E>(&self, fun: F) -> StdResult<Out, E>
    where
        F: Fn() -> U,
        U: Future<Output = StdResult<Out, E>>,
        E: fmt::Display,
    {
        let mut delay = self.base_delay;
        for attempt in 1..self.attempts {
            match fun().await {
                Ok(v) => return Ok(v),
                Err(e) => {
                    debug!("attempt {}/{} failed: {}", attempt, self.attempts, e);
                    sleep(delay).await;
                    delay *= 2;
                }
            }
        }
        fun().await
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RETRY_COUNT, RETRY_BASE_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn policy() -> RetryPolicy {
        RetryPolicy::new(3, Duration::from_millis(1))
    }

    #[tokio::test]
    async fn succeeds_after_transient_failures() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, String> = policy()
            .run(|| {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err(format!("transient {}", n))
                    } else {
                        Ok(n)
                    }
                }
            })
            .await;
        assert_eq!(result, Ok(2));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn returns_last_error_at_ceiling() {
        let calls = AtomicU32::new(0);
        let result: Result<(), String> = policy()
            .run(|| {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                async move { Err(format!("failure {}", n)) }
            })
            .await;
        assert_eq!(result, Err(String::from("failure 2")));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn first_success_short_circuits() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, String> = policy()
            .run(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Ok(7) }
            })
            .await;
        assert_eq!(result, Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
