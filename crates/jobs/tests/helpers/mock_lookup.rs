#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{RwLock, Semaphore};
use warmdns_application::ports::{DnsAnswer, DnsLookup};
use warmdns_domain::{DomainError, RecordType};

/// Lookup answering from a fixed table; unknown keys get an empty answer.
pub struct MockDnsLookup {
    ttls: RwLock<HashMap<(String, RecordType), Vec<u32>>>,
    call_count: AtomicU64,
    gate: Option<Arc<Semaphore>>,
}

impl MockDnsLookup {
    pub fn new() -> Self {
        Self {
            ttls: RwLock::new(HashMap::new()),
            call_count: AtomicU64::new(0),
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
        self.ttls
            .write()
            .await
            .insert((name.to_string(), record_type), ttls);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DnsLookup for MockDnsLookup {
    async fn lookup(&self, name: &str, record_type: RecordType) -> Result<DnsAnswer, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }

        let ttls = self
            .ttls
            .read()
            .await
            .get(&(name.to_string(), record_type))
            .cloned()
            .unwrap_or_default();
        Ok(DnsAnswer::new(ttls))
    }
}
