//! Bounded retry helper.
//!
//! Retries an async operation a fixed number of times with a fixed delay
//! between attempts. Sleeping is abstracted behind [`RetrySleeper`] so tests
//! can run the loop without waiting on the clock.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

/// Number of attempts and pause between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first call. Values below one are
    /// treated as one.
    pub attempts: u32,
    /// Pause between consecutive attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Build a policy.
    pub const fn new(attempts: u32, delay: Duration) -> Self {
        Self { attempts, delay }
    }

    fn max_attempts(&self) -> u32 {
        self.attempts.max(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

/// Errors that know whether another attempt could succeed.
pub trait Retryable {
    /// Whether the failed attempt may be retried.
    fn is_retryable(&self) -> bool;
}

/// Async sleeping abstraction used between attempts.
#[async_trait]
pub trait RetrySleeper: Send + Sync {
    /// Suspend execution for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Tokio-backed sleeper.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl RetrySleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Run `operation` until it succeeds, fails with a non-retryable error, or
/// the policy's attempts are used up.
///
/// `operation` receives the 1-based attempt number. The last error is
/// returned when attempts run out. No pause follows the final attempt.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use wishlist::domain::{RetryPolicy, Retryable, TokioSleeper, retry};
///
/// #[derive(Debug)]
/// struct Flaky;
/// impl Retryable for Flaky {
///     fn is_retryable(&self) -> bool { true }
/// }
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let policy = RetryPolicy::new(3, Duration::ZERO);
/// let result: Result<u32, Flaky> = retry(&policy, &TokioSleeper, |attempt| async move {
///     if attempt < 3 { Err(Flaky) } else { Ok(attempt) }
/// })
/// .await;
/// assert_eq!(result.expect("third attempt succeeds"), 3);
/// # });
/// ```
pub async fn retry<T, E, F, Fut>(
    policy: &RetryPolicy,
    sleeper: &dyn RetrySleeper,
    mut operation: F,
) -> Result<T, E>
where
    E: Retryable,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = policy.max_attempts();
    let mut attempt = 1;
    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(error) if error.is_retryable() && attempt < max_attempts => {
                debug!(attempt, max_attempts, "retryable failure; backing off");
                sleeper.sleep(policy.delay).await;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug, PartialEq, Eq)]
    enum TestError {
        Transient,
        Permanent,
    }

    impl Retryable for TestError {
        fn is_retryable(&self) -> bool {
            matches!(self, Self::Transient)
        }
    }

    #[derive(Default)]
    struct RecordingSleeper {
        pauses: Mutex<Vec<Duration>>,
    }

    impl RecordingSleeper {
        fn pauses(&self) -> Vec<Duration> {
            self.pauses.lock().expect("pauses mutex").clone()
        }
    }

    #[async_trait]
    impl RetrySleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.pauses.lock().expect("pauses mutex").push(duration);
        }
    }

    fn policy() -> RetryPolicy {
        RetryPolicy::new(3, Duration::from_millis(1_000))
    }

    #[tokio::test]
    async fn returns_first_success_without_sleeping() {
        let sleeper = RecordingSleeper::default();
        let result: Result<&str, TestError> =
            retry(&policy(), &sleeper, |_| async { Ok("done") }).await;

        assert_eq!(result, Ok("done"));
        assert!(sleeper.pauses().is_empty());
    }

    #[tokio::test]
    async fn exhausts_attempts_on_transient_failures() {
        let sleeper = RecordingSleeper::default();
        let calls = AtomicU32::new(0);
        let result: Result<(), TestError> = retry(&policy(), &sleeper, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(TestError::Transient) }
        })
        .await;

        assert_eq!(result, Err(TestError::Transient));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(sleeper.pauses(), vec![Duration::from_millis(1_000); 2]);
    }

    #[tokio::test]
    async fn stops_on_permanent_failure() {
        let sleeper = RecordingSleeper::default();
        let calls = AtomicU32::new(0);
        let result: Result<(), TestError> = retry(&policy(), &sleeper, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(TestError::Permanent) }
        })
        .await;

        assert_eq!(result, Err(TestError::Permanent));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(sleeper.pauses().is_empty());
    }

    #[tokio::test]
    async fn recovers_after_transient_failure() {
        let sleeper = RecordingSleeper::default();
        let result = retry(&policy(), &sleeper, |attempt| async move {
            if attempt == 1 {
                Err(TestError::Transient)
            } else {
                Ok(attempt)
            }
        })
        .await;

        assert_eq!(result, Ok(2));
        assert_eq!(sleeper.pauses().len(), 1);
    }

    #[tokio::test]
    async fn zero_attempts_still_calls_once() {
        let sleeper = RecordingSleeper::default();
        let calls = AtomicU32::new(0);
        let zero = RetryPolicy::new(0, Duration::ZERO);
        let _: Result<(), TestError> = retry(&zero, &sleeper, |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(TestError::Transient) }
        })
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
