//! Pause taken between two page requests.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

/// Strategy for waiting between consecutive pages
#[async_trait]
pub trait PageDelay: Send + Sync {
    async fn pause(&self);
}

/// Sleeps for a fixed duration
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    duration: Duration,
}

impl FixedDelay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

#[async_trait]
impl PageDelay for FixedDelay {
    async fn pause(&self) {
        tracing::debug!(wait_ms = self.duration.as_millis(), "Waiting before next page");
        sleep(self.duration).await;
    }
}

/// Returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl PageDelay for NoDelay {
    async fn pause(&self) {}
}
