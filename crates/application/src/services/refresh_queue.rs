use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};
use warmdns_domain::{DomainError, DueQueue, RecordType, WarmEntry};

enum QueueCommand {
    Push(WarmEntry),
    Pop(oneshot::Sender<Option<WarmEntry>>),
    Len(oneshot::Sender<usize>),
    Snapshot(oneshot::Sender<Vec<(Arc<str>, RecordType)>>),
}

/// Handle to the single task that owns the [`DueQueue`].
///
/// Every clone sends into the same unbounded channel, so requests from all
/// producers are applied one at a time in arrival order. `push` does not wait
/// for the worker; `pop`, `len` and `snapshot` wait for its reply and observe
/// every request admitted before them.
#[derive(Clone)]
pub struct RefreshQueue {
    sender: mpsc::UnboundedSender<QueueCommand>,
}

impl RefreshQueue {
    /// Spawns the owning worker on the current tokio runtime.
    pub fn spawn() -> Self {
        Self::spawn_with(DueQueue::new())
    }

    pub fn spawn_with(queue: DueQueue) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(Self::run(queue, receiver));
        Self { sender }
    }

    async fn run(mut queue: DueQueue, mut receiver: mpsc::UnboundedReceiver<QueueCommand>) {
        debug!("Refresh queue worker started");

        while let Some(command) = receiver.recv().await {
            match command {
                QueueCommand::Push(entry) => {
                    debug!(entry = %entry, due_at = entry.due_at, "queue push");
                    queue.push(entry);
                }
                QueueCommand::Pop(reply) => {
                    let entry = queue.pop_min();
                    if let Some(ref e) = entry {
                        debug!(entry = %e, "queue pop");
                    }
                    // The caller may have gone away; put the entry back so it is not lost.
                    if let Err(Some(entry)) = reply.send(entry) {
                        queue.push(entry);
                    }
                }
                QueueCommand::Len(reply) => {
                    let _ = reply.send(queue.len());
                }
                QueueCommand::Snapshot(reply) => {
                    let pairs = queue
                        .iter()
                        .map(|e| (Arc::clone(&e.name), e.record_type))
                        .collect();
                    let _ = reply.send(pairs);
                }
            }
        }

        info!(remaining = queue.len(), "Refresh queue worker stopped");
    }

    pub fn push(&self, entry: WarmEntry) -> Result<(), DomainError> {
        self.sender
            .send(QueueCommand::Push(entry))
            .map_err(|_| DomainError::QueueClosed)
    }

    /// Removes the earliest-due entry, `None` if the queue is empty.
    pub async fn pop(&self) -> Result<Option<WarmEntry>, DomainError> {
        self.request(QueueCommand::Pop).await
    }

    pub async fn len(&self) -> Result<usize, DomainError> {
        self.request(QueueCommand::Len).await
    }

    pub async fn is_empty(&self) -> Result<bool, DomainError> {
        Ok(self.len().await? == 0)
    }

    /// Name/type pairs in heap-array order.
    pub async fn snapshot(&self) -> Result<Vec<(Arc<str>, RecordType)>, DomainError> {
        self.request(QueueCommand::Snapshot).await
    }

    async fn request<T>(
        &self,
        command: impl FnOnce(oneshot::Sender<T>) -> QueueCommand,
    ) -> Result<T, DomainError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(command(reply))
            .map_err(|_| DomainError::QueueClosed)?;
        response.await.map_err(|_| DomainError::QueueClosed)
    }
}
