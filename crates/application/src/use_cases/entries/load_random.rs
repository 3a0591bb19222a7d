use crate::services::BulkLoader;
use std::sync::Arc;
use tracing::{info, instrument};
use warmdns_domain::DomainError;

pub struct LoadRandomEntriesUseCase {
    loader: Arc<BulkLoader>,
    qps_aim: usize,
}

impl LoadRandomEntriesUseCase {
    pub fn new(loader: Arc<BulkLoader>, qps_aim: usize) -> Self {
        Self { loader, qps_aim }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, count: usize) -> Result<usize, DomainError> {
        let size = self.loader.load_random(count, self.qps_aim).await?;
        info!(count, qps_aim = self.qps_aim, size, "Random entries loaded");
        Ok(size)
    }
}
