use super::RefreshQueue;
use crate::ports::SeedSource;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};
use warmdns_domain::{now_millis, numbered_lines, DomainError, SeedEntry, WarmEntry};

/// Result of one seed load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedLoadReport {
    pub read: usize,
    pub added: usize,
    pub skipped_malformed: usize,
    pub skipped_duplicate: usize,
}

/// Number of one-second buckets a batch of `count` entries is spread over.
///
/// Integer division with a floor of one, so small batches all land in the
/// first bucket.
pub fn stagger_bucket_size(count: usize, qps_aim: usize) -> usize {
    (count / qps_aim.max(1)).max(1)
}

/// Due offset in seconds of the `index`-th entry of a staggered batch.
pub fn stagger_offset_secs(index: usize, bucket_size: usize) -> u32 {
    (index % bucket_size.max(1)) as u32
}

/// Builds batches of entries and feeds them through the refresh queue.
pub struct BulkLoader {
    queue: RefreshQueue,
    source: Arc<dyn SeedSource>,
    seen: Mutex<HashSet<String>>,
}

impl BulkLoader {
    pub fn new(queue: RefreshQueue, source: Arc<dyn SeedSource>) -> Self {
        Self {
            queue,
            source,
            seen: Mutex::new(HashSet::new()),
        }
    }

    /// Loads every valid, not yet seen seed line with `due_at = now`.
    ///
    /// Blank lines are ignored. Malformed lines are logged with their source
    /// line number and skipped. Only a failure to read the source is an error.
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub async fn load_seed(&self) -> Result<SeedLoadReport, DomainError> {
        self.load_seed_inner(None).await
    }

    /// Like [`load_seed`](Self::load_seed) but spreads due times over
    /// one-second buckets sized for `qps_aim`.
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    pub async fn load_seed_staggered(&self, qps_aim: usize) -> Result<SeedLoadReport, DomainError> {
        self.load_seed_inner(Some(qps_aim)).await
    }

    async fn load_seed_inner(&self, qps_aim: Option<usize>) -> Result<SeedLoadReport, DomainError> {
        let lines = self.source.read_lines().await?;
        let mut report = SeedLoadReport::default();

        let mut fresh = Vec::with_capacity(lines.len());
        {
            let mut seen = self.seen.lock().await;
            for (line, raw) in numbered_lines(&lines) {
                report.read += 1;
                let entry = match SeedEntry::parse_line(raw, line) {
                    Ok(entry) => entry,
                    Err(e) => {
                        warn!(
                            line,
                            error = %e,
                            "Skipping seed line, syntax is '<domain> <rr type>' (e.g. 'github.com A')"
                        );
                        report.skipped_malformed += 1;
                        continue;
                    }
                };
                if !seen.insert(raw.to_string()) {
                    report.skipped_duplicate += 1;
                    continue;
                }
                fresh.push(entry);
            }
        }

        let now = now_millis();
        let bucket_size = qps_aim.map(|qps| stagger_bucket_size(fresh.len(), qps));
        for (index, seed) in fresh.into_iter().enumerate() {
            let mut entry = WarmEntry::new(seed.name, seed.record_type, now);
            if let Some(bucket_size) = bucket_size {
                entry.refresh_in_seconds_from(now, stagger_offset_secs(index, bucket_size));
            }
            self.queue.push(entry)?;
            report.added += 1;
        }

        info!(
            read = report.read,
            added = report.added,
            skipped_malformed = report.skipped_malformed,
            skipped_duplicate = report.skipped_duplicate,
            "Seed list loaded"
        );
        Ok(report)
    }

    /// Adds `count` entries sampled uniformly (with replacement) from the
    /// seed list, staggered so roughly `qps_aim` of them become due per
    /// second. Returns the queue size afterwards.
    #[instrument(skip(self))]
    pub async fn load_random(&self, count: usize, qps_aim: usize) -> Result<usize, DomainError> {
        if count == 0 {
            return Err(DomainError::InvalidCount(
                "count must be a positive integer > 0".to_string(),
            ));
        }

        let lines = self.source.read_lines().await?;
        let candidates: Vec<SeedEntry> = numbered_lines(&lines)
            .filter_map(|(line, raw)| SeedEntry::parse_line(raw, line).ok())
            .collect();

        if candidates.is_empty() {
            warn!(source = %self.source.describe(), "Seed list is empty, nothing to sample");
            return self.queue.len().await;
        }

        let bucket_size = stagger_bucket_size(count, qps_aim);
        let now = now_millis();
        for index in 0..count {
            let seed = &candidates[fastrand::usize(..candidates.len())];
            let mut entry = WarmEntry::new(Arc::clone(&seed.name), seed.record_type, now);
            entry.refresh_in_seconds_from(now, stagger_offset_secs(index, bucket_size));
            self.queue.push(entry)?;
        }

        debug!(count, bucket_size, "Random sample queued");
        self.queue.len().await
    }
}
