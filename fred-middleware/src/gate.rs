//! Sliding-window admission gate.

use std::collections::VecDeque;
use std::time::Duration;

use fred_types::RateLimitConfig;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Sliding-window request gate.
///
/// Keeps the admission times of the trailing window. A caller arriving while the
/// window is full sleeps until the oldest admission ages out, then proceeds. The lock
/// is held across that sleep, so concurrent callers are admitted one at a time in
/// arrival order.
///
/// Share one gate between every client that draws on the same budget via `Arc`.
#[derive(Debug)]
pub struct RateGate {
    capacity: usize,
    window: Duration,
    history: Mutex<VecDeque<Instant>>,
}

impl RateGate {
    /// Create a gate from a budget. A capacity of zero is treated as one.
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        let capacity = usize::try_from(config.capacity).unwrap_or(usize::MAX).max(1);
        Self {
            capacity,
            window: config.window,
            history: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
        }
    }

    /// Maximum admissions within any trailing window.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Length of the trailing window.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Wait until admission is allowed, record it, and return how long the caller waited.
    pub async fn admit(&self) -> Duration {
        let mut history = self.history.lock().await;
        let now = Instant::now();
        self.prune(&mut history, now);

        let mut waited = Duration::ZERO;
        if history.len() >= self.capacity {
            let wait = self.wait_for(&history, now);
            if !wait.is_zero() {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target: "fred::middleware",
                    wait_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX),
                    capacity = self.capacity,
                    "rate limit reached; waiting"
                );
                tokio::time::sleep(wait).await;
                waited = wait;
            }
            self.prune(&mut history, Instant::now());
        }

        history.push_back(Instant::now());
        waited
    }

    /// Admit without waiting.
    ///
    /// # Errors
    /// Returns the wait that [`RateGate::admit`] would have needed when the window is
    /// full; nothing is recorded in that case.
    pub async fn try_admit(&self) -> Result<(), Duration> {
        let mut history = self.history.lock().await;
        let now = Instant::now();
        self.prune(&mut history, now);
        if history.len() >= self.capacity {
            return Err(self.wait_for(&history, now));
        }
        history.push_back(now);
        Ok(())
    }

    /// Number of admissions inside the current window.
    pub async fn in_flight_window(&self) -> usize {
        let mut history = self.history.lock().await;
        self.prune(&mut history, Instant::now());
        history.len()
    }

    fn prune(&self, history: &mut VecDeque<Instant>, now: Instant) {
        while let Some(&oldest) = history.front() {
            if now.saturating_duration_since(oldest) >= self.window {
                history.pop_front();
            } else {
                break;
            }
        }
    }

    fn wait_for(&self, history: &VecDeque<Instant>, now: Instant) -> Duration {
        history.front().map_or(Duration::ZERO, |&oldest| {
            self.window
                .saturating_sub(now.saturating_duration_since(oldest))
        })
    }
}

impl Default for RateGate {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(capacity: u32, secs: u64) -> RateGate {
        RateGate::new(RateLimitConfig::per_seconds(capacity, secs))
    }

    #[tokio::test(start_paused = true)]
    async fn empty_history_never_waits() {
        let g = gate(3, 60);
        assert_eq!(g.admit().await, Duration::ZERO);
        assert_eq!(g.in_flight_window().await, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_capacity_is_clamped() {
        let g = gate(0, 10);
        assert_eq!(g.capacity(), 1);
        assert_eq!(g.admit().await, Duration::ZERO);
        assert_eq!(g.try_admit().await, Err(Duration::from_secs(10)));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_window_never_waits() {
        let g = gate(1, 0);
        for _ in 0..5 {
            assert_eq!(g.admit().await, Duration::ZERO);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn old_admissions_are_pruned() {
        let g = gate(2, 5);
        g.admit().await;
        g.admit().await;
        assert_eq!(g.in_flight_window().await, 2);
        tokio::time::advance(Duration::from_secs(5)).await;
        assert_eq!(g.in_flight_window().await, 0);
        assert!(g.try_admit().await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn try_admit_reports_remaining_wait() {
        let g = gate(1, 10);
        assert!(g.try_admit().await.is_ok());
        tokio::time::advance(Duration::from_secs(4)).await;
        assert_eq!(g.try_admit().await, Err(Duration::from_secs(6)));
        assert_eq!(g.in_flight_window().await, 1);
    }
}
