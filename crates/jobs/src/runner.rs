use crate::RefreshJob;
use std::sync::Arc;
use tracing::info;

/// Central orchestrator for background jobs.
///
/// ```rust,ignore
/// JobRunner::new()
///     .with_refresh(RefreshJob::new(queue, pipeline, timings).with_cancellation(token))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    refresh: Option<RefreshJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self { refresh: None }
    }

    pub fn with_refresh(mut self, job: RefreshJob) -> Self {
        self.refresh = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.refresh {
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
