use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};
use warmdns_application::services::{RefreshQueue, ResolutionPipeline};
use warmdns_domain::config::RefreshConfig;
use warmdns_domain::{now_millis, DomainError, WarmEntry};

/// Sleep and look-ahead settings of the refresh loop, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTimings {
    pub idle_sleep_ms: u64,
    pub low_threshold_ms: u64,
    pub poll_interval_ms: u64,
}

impl From<&RefreshConfig> for RefreshTimings {
    fn from(config: &RefreshConfig) -> Self {
        Self {
            idle_sleep_ms: config.idle_sleep_ms,
            low_threshold_ms: config.low_threshold_ms,
            poll_interval_ms: config.poll_interval_ms,
        }
    }
}

/// What one loop iteration did.
#[derive(Debug)]
pub enum TickOutcome {
    /// The queue was empty.
    Idle,
    /// The earliest entry is not due soon enough and went back into the queue.
    Deferred { remaining_ms: i64 },
    /// The entry was handed to a detached resolution task.
    Dispatched(JoinHandle<()>),
}

/// Drives the refresh queue: pops the earliest entry, waits for it to come
/// due, resolves it in the background and reinserts it with its new due time.
///
/// An entry is out of the queue while its resolution runs, so it never has
/// more than one lookup in flight.
pub struct RefreshJob {
    queue: RefreshQueue,
    pipeline: Arc<ResolutionPipeline>,
    timings: RefreshTimings,
    shutdown: CancellationToken,
}

impl RefreshJob {
    pub fn new(queue: RefreshQueue, pipeline: Arc<ResolutionPipeline>, timings: RefreshTimings) -> Self {
        Self {
            queue,
            pipeline,
            timings,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Spawns the loop. Cancelling the token stops dispatching; resolutions
    /// already in flight still finish and reinsert their entries.
    pub async fn start(self: Arc<Self>) {
        info!(
            idle_sleep_ms = self.timings.idle_sleep_ms,
            low_threshold_ms = self.timings.low_threshold_ms,
            poll_interval_ms = self.timings.poll_interval_ms,
            "Starting refresh job"
        );

        tokio::spawn(async move {
            self.run().await;
        });
    }

    async fn run(&self) {
        loop {
            if self.shutdown.is_cancelled() {
                info!("RefreshJob: shutting down");
                break;
            }

            let pause = match self.tick().await {
                Ok(TickOutcome::Idle) => Duration::from_millis(self.timings.idle_sleep_ms),
                Ok(TickOutcome::Deferred { .. }) => {
                    Duration::from_millis(self.timings.poll_interval_ms)
                }
                Ok(TickOutcome::Dispatched(_)) => continue,
                Err(e) => {
                    error!(error = %e, "RefreshJob: queue unavailable, stopping");
                    break;
                }
            };

            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("RefreshJob: shutting down");
                    break;
                }
                _ = tokio::time::sleep(pause) => {}
            }
        }
    }

    /// Runs one iteration without the idle or deferral sleep.
    pub async fn tick(&self) -> Result<TickOutcome, DomainError> {
        let Some(entry) = self.queue.pop().await? else {
            return Ok(TickOutcome::Idle);
        };

        let remaining_ms = entry.millis_until_due(now_millis());
        if remaining_ms > self.timings.low_threshold_ms as i64 {
            self.queue.push(entry)?;
            return Ok(TickOutcome::Deferred { remaining_ms });
        }

        if (0..=self.timings.poll_interval_ms as i64).contains(&remaining_ms) {
            tokio::time::sleep(Duration::from_millis(remaining_ms as u64)).await;
        }

        Ok(TickOutcome::Dispatched(self.dispatch(entry)))
    }

    fn dispatch(&self, mut entry: WarmEntry) -> JoinHandle<()> {
        let queue = self.queue.clone();
        let pipeline = Arc::clone(&self.pipeline);

        tokio::spawn(async move {
            let resolution = pipeline.resolve(&entry).await;
            entry.refresh_in_seconds(resolution.ttl);

            debug!(
                entry = %entry,
                ttl = resolution.ttl,
                strategy = resolution.strategy.map_or("fallback", |s| s.as_str()),
                "Entry refreshed"
            );

            if let Err(e) = queue.push(entry) {
                error!(error = %e, "Failed to reinsert refreshed entry");
            }
        })
    }
}
