use crate::services::RefreshQueue;
use warmdns_domain::DomainError;

pub struct CountEntriesUseCase {
    queue: RefreshQueue,
}

impl CountEntriesUseCase {
    pub fn new(queue: RefreshQueue) -> Self {
        Self { queue }
    }

    pub async fn execute(&self) -> Result<usize, DomainError> {
        self.queue.len().await
    }
}
