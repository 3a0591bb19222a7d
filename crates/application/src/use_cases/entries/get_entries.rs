use crate::services::RefreshQueue;
use std::sync::Arc;
use tracing::{debug, instrument};
use warmdns_domain::{DomainError, RecordType};

pub struct GetEntriesUseCase {
    queue: RefreshQueue,
}

impl GetEntriesUseCase {
    pub fn new(queue: RefreshQueue) -> Self {
        Self { queue }
    }

    /// Queued name/type pairs. Entries currently being resolved are not
    /// included; order follows the heap array, not due time.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<(Arc<str>, RecordType)>, DomainError> {
        let pairs = self.queue.snapshot().await?;
        debug!(count = pairs.len(), "Queue snapshot taken");
        Ok(pairs)
    }
}
