#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{RwLock, Semaphore};
use warmdns_application::ports::{DnsAnswer, DnsLookup, SeedLines, SeedSource};
use warmdns_domain::{DomainError, RecordType};

// ============================================================================
// Mock DnsLookup
// ============================================================================

pub struct MockDnsLookup {
    responses: Arc<RwLock<HashMap<(String, RecordType), Result<DnsAnswer, DomainError>>>>,
    calls: Arc<RwLock<Vec<(String, RecordType)>>>,
    call_count: Arc<AtomicU64>,
    gate: Option<Arc<Semaphore>>,
}

impl MockDnsLookup {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
            call_count: Arc::new(AtomicU64::new(0)),
            gate: None,
        }
    }

    /// Every lookup waits for a permit on `gate` before answering.
    pub fn gated(gate: Arc<Semaphore>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::new()
        }
    }

    pub async fn set_ttls(&self, name: &str, record_type: RecordType, ttls: Vec<u32>) {
        self.responses
            .write()
            .await
            .insert((name.to_string(), record_type), Ok(DnsAnswer::new(ttls)));
    }

    pub async fn set_error(&self, name: &str, record_type: RecordType, error: DomainError) {
        self.responses
            .write()
            .await
            .insert((name.to_string(), record_type), Err(error));
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn calls(&self) -> Vec<(String, RecordType)> {
        self.calls.read().await.clone()
    }

    pub async fn was_queried(&self, name: &str, record_type: RecordType) -> bool {
        self.calls
            .read()
            .await
            .iter()
            .any(|(n, t)| n == name && *t == record_type)
    }
}

#[async_trait]
impl DnsLookup for MockDnsLookup {
    async fn lookup(&self, name: &str, record_type: RecordType) -> Result<DnsAnswer, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.calls
            .write()
            .await
            .push((name.to_string(), record_type));

        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }

        match self
            .responses
            .read()
            .await
            .get(&(name.to_string(), record_type))
        {
            Some(response) => response.clone(),
            None => Ok(DnsAnswer::new(Vec::new())),
        }
    }
}

// ============================================================================
// In-memory SeedSource
// ============================================================================

pub struct MemorySeedSource {
    lines: Arc<RwLock<SeedLines>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MemorySeedSource {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: Arc::new(RwLock::new(lines.iter().map(|l| l.to_string()).collect())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn push_line(&self, line: &str) {
        self.lines.write().await.push(line.to_string());
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }
}

#[async_trait]
impl SeedSource for MemorySeedSource {
    async fn read_lines(&self) -> Result<SeedLines, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::IoError("seed source unavailable".to_string()));
        }
        Ok(self.lines.read().await.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
