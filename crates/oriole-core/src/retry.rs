//! Bounded retry for fragile host calls.
//!
//! Host automation sessions intermittently fail to come up right after the
//! host application starts or while it is busy. A small linear backoff
//! absorbs this without pushing any complexity onto callers. The wrapper is
//! generic over the operation's value and error types; which errors count
//! as transient is the caller's call, via a predicate.

use std::thread;
use std::time::Duration;

/// A bounded linear-backoff retry policy.
///
/// `max_retries` counts retries, not attempts: a policy with
/// `max_retries = 0` executes the operation exactly once.
///
/// The wait between attempts is a blocking sleep on the calling thread.
/// There is no timeout or cancellation; the total time an exhausted run can
/// block is `max_retries * interval` plus the operation's own latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Time to sleep between attempts.
    pub interval: Duration,
    /// How many times to retry after the first failure.
    pub max_retries: u32,
}

impl RetryPolicy {
    /// Create a policy.
    pub const fn new(interval: Duration, max_retries: u32) -> Self {
        Self {
            interval,
            max_retries,
        }
    }

    /// Execute `op`, retrying on transient errors.
    ///
    /// - A successful attempt returns its value immediately.
    /// - An error for which `is_transient` returns true is passed to
    ///   `on_retry` and retried after [`interval`](Self::interval), until
    ///   [`max_retries`](Self::max_retries) retries have been spent; the
    ///   final error is returned unchanged.
    /// - An error for which `is_transient` returns false is returned
    ///   immediately, without invoking `on_retry`.
    ///
    /// Callers cannot tell "failed on the first attempt" from "failed
    /// after N retries" except through the `on_retry` observer.
    pub fn run<T, E, F, P, O>(&self, mut op: F, is_transient: P, mut on_retry: O) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        P: Fn(&E) -> bool,
        O: FnMut(&E),
    {
        let mut attempt = 0u32;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(err) if is_transient(&err) && attempt < self.max_retries => {
                    attempt += 1;
                    on_retry(&err);
                    thread::sleep(self.interval);
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// [`run`](Self::run) without an observer.
    pub fn run_quiet<T, E, F, P>(&self, op: F, is_transient: P) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        P: Fn(&E) -> bool,
    {
        self.run(op, is_transient, |_| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[derive(Debug, PartialEq)]
    enum TestError {
        Transient,
        Fatal,
    }

    fn transient(e: &TestError) -> bool {
        matches!(e, TestError::Transient)
    }

    #[test]
    fn test_success_returns_immediately() {
        let policy = RetryPolicy::new(Duration::from_millis(1), 5);
        let mut calls = 0;
        let result: Result<i32, TestError> = policy.run(
            || {
                calls += 1;
                Ok(42)
            },
            transient,
            |_| panic!("observer must not fire on success"),
        );
        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_zero_retries_calls_exactly_once() {
        let policy = RetryPolicy::new(Duration::from_millis(1), 0);
        let mut calls = 0;
        let mut observed = 0;
        let result: Result<(), TestError> = policy.run(
            || {
                calls += 1;
                Err(TestError::Transient)
            },
            transient,
            |_| observed += 1,
        );
        assert_eq!(result.unwrap_err(), TestError::Transient);
        assert_eq!(calls, 1);
        assert_eq!(observed, 0);
    }

    #[test]
    fn test_fails_twice_then_succeeds() {
        let policy = RetryPolicy::new(Duration::from_millis(100), 3);
        let mut calls = 0;
        let mut observed = 0;
        let start = Instant::now();
        let result: Result<&str, TestError> = policy.run(
            || {
                calls += 1;
                if calls < 3 {
                    Err(TestError::Transient)
                } else {
                    Ok("connected")
                }
            },
            transient,
            |_| observed += 1,
        );
        assert_eq!(result.unwrap(), "connected");
        assert_eq!(calls, 3);
        assert_eq!(observed, 2);
        // Two sleeps of 100ms each happened before the third attempt.
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[test]
    fn test_exhausted_retries_propagate_original_error() {
        let policy = RetryPolicy::new(Duration::from_millis(1), 2);
        let mut calls = 0;
        let mut observed = 0;
        let result: Result<(), TestError> = policy.run(
            || {
                calls += 1;
                Err(TestError::Transient)
            },
            transient,
            |_| observed += 1,
        );
        assert_eq!(result.unwrap_err(), TestError::Transient);
        assert_eq!(calls, 3); // 1 attempt + 2 retries
        assert_eq!(observed, 2);
    }

    #[test]
    fn test_non_transient_error_is_not_retried() {
        let policy = RetryPolicy::new(Duration::from_millis(1), 5);
        let mut calls = 0;
        let result: Result<(), TestError> = policy.run(
            || {
                calls += 1;
                Err(TestError::Fatal)
            },
            transient,
            |_| panic!("observer must not fire for non-transient errors"),
        );
        assert_eq!(result.unwrap_err(), TestError::Fatal);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_run_quiet() {
        let policy = RetryPolicy::new(Duration::from_millis(1), 1);
        let mut calls = 0;
        let result: Result<(), TestError> = policy.run_quiet(
            || {
                calls += 1;
                Err(TestError::Transient)
            },
            transient,
        );
        assert!(result.is_err());
        assert_eq!(calls, 2);
    }
}
