//! Minimum-spacing rate limiter for outbound requests

use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tracing::trace;

/// Enforces a fixed minimum interval between consecutive dispatches.
///
/// The venue enforces a flat per-second ceiling, so this is a spacing
/// limiter rather than a token bucket: no bursts are allowed.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    /// `None` until the first dispatch
    last_dispatch: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Create a limiter allowing one dispatch per `min_interval`
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_dispatch: Mutex::new(None),
        }
    }

    /// Configured spacing
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until a request may be dispatched, then record the dispatch.
    ///
    /// The lock is held across the sleep so concurrent callers queue up
    /// behind each other and never observe the same stale timestamp.
    pub async fn wait(&self) {
        let mut last_dispatch = self.last_dispatch.lock().await;

        if let Some(previous) = *last_dispatch {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                let remaining = self.min_interval - elapsed;
                trace!("rate limited, sleeping {:?}", remaining);
                sleep(remaining).await;
            }
        }

        *last_dispatch = Some(Instant::now());
    }
}
