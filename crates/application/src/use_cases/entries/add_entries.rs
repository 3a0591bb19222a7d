use crate::services::RefreshQueue;
use tracing::{info, instrument};
use warmdns_domain::{now_millis, DomainError, WarmEntry};

/// Unvalidated name/type pair as received from a caller.
#[derive(Debug, Clone)]
pub struct EntryRequest {
    pub name: String,
    pub record_type: String,
}

pub struct AddEntriesUseCase {
    queue: RefreshQueue,
}

impl AddEntriesUseCase {
    pub fn new(queue: RefreshQueue) -> Self {
        Self { queue }
    }

    /// Validates the whole batch before queueing any of it; returns the
    /// queue size afterwards.
    #[instrument(skip(self, requests), fields(count = requests.len()))]
    pub async fn execute(&self, requests: Vec<EntryRequest>) -> Result<usize, DomainError> {
        let now = now_millis();
        let entries = requests
            .iter()
            .map(|r| WarmEntry::parse(&r.name, &r.record_type, now))
            .collect::<Result<Vec<_>, _>>()?;

        let added = entries.len();
        for entry in entries {
            self.queue.push(entry)?;
        }

        let size = self.queue.len().await?;
        info!(added, size, "Entries added");
        Ok(size)
    }
}
