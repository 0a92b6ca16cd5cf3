//! Fixed-delay pacing between consecutive requests
//!
//! NCBI asks clients without an API key to stay below three requests per
//! second. Batch fetching uses a [`Pacer`] so that consecutive EFetch requests
//! are separated by at least the configured delay. The first request is never
//! delayed.

use std::time::Duration;

use tokio::time::{self, Instant};
use tracing::debug;

/// Enforces a minimum interval between successive calls to [`Pacer::wait`]
#[derive(Debug)]
pub struct Pacer {
    interval: Duration,
    last: Option<Instant>,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until at least `interval` has passed since the previous call
    pub async fn wait(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                let remaining = self.interval - elapsed;
                debug!(wait_ms = remaining.as_millis() as u64, "Pacing next request");
                time::sleep(remaining).await;
            }
        }
        self.last = Some(Instant::now());
    }
}
