//! Port for the delay that precedes a notification's removal.

use std::time::Duration;

use async_trait::async_trait;

/// Suspends an expiry task until its notification should be removed.
///
/// Production uses [`TokioSleeper`]; tests substitute doubles that never wake
/// so removal is driven by the clock alone.
#[async_trait]
pub trait ExpirySleeper: Send + Sync {
    /// Suspend execution for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Sleeper backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl ExpirySleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
