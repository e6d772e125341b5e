//! Rate limiting for outbound provider calls
//!
//! A single [`RateLimiter`] instance is shared by reference among all call
//! sites that must coordinate; the enforced minimum interval holds under
//! concurrent callers because the timestamp is read and re-stamped under one
//! lock that stays held across the wait.

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Enforces a minimum elapsed time between consecutive outbound calls.
pub struct RateLimiter {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Create a rate limiter with the given minimum interval
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    /// Create a rate limiter from a delay in seconds
    pub fn from_secs_f64(secs: f64) -> Self {
        Self::new(Duration::from_secs_f64(secs.max(0.0)))
    }

    /// Block until at least `min_interval` has elapsed since the previous
    /// call's completion, then record the current time.
    ///
    /// Never fails; worst case it sleeps for the full interval. Concurrent
    /// callers are served one at a time.
    pub async fn await_turn(&self) {
        let mut last_call = self.last_call.lock().await;

        if let Some(last) = *last_call {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }

        *last_call = Some(Instant::now());
    }

    /// The configured minimum interval
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn first_call_does_not_wait() {
        let limiter = RateLimiter::new(Duration::from_secs(1));
        let start = Instant::now();
        limiter.await_turn().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn consecutive_calls_are_spaced() {
        let limiter = RateLimiter::new(Duration::from_secs(1));

        let start = Instant::now();
        limiter.await_turn().await;
        limiter.await_turn().await;

        assert!(start.elapsed() >= Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_interval_never_blocks() {
        let limiter = RateLimiter::from_secs_f64(0.0);
        let start = Instant::now();
        limiter.await_turn().await;
        limiter.await_turn().await;
        limiter.await_turn().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_callers_are_serialized() {
        let limiter = Arc::new(RateLimiter::new(Duration::from_secs(1)));
        let mut handles = Vec::new();

        for _ in 0..3 {
            let limiter = Arc::clone(&limiter);
            handles.push(tokio::spawn(async move {
                limiter.await_turn().await;
                Instant::now()
            }));
        }

        let mut completions = Vec::new();
        for handle in handles {
            completions.push(handle.await.unwrap());
        }
        completions.sort();

        for pair in completions.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_secs(1));
        }
    }

    #[test]
    fn negative_delay_clamps_to_zero() {
        let limiter = RateLimiter::from_secs_f64(-1.0);
        assert_eq!(limiter.min_interval(), Duration::ZERO);
    }
}
