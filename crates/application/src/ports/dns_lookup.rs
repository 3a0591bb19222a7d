use async_trait::async_trait;
use warmdns_domain::{DomainError, RecordType};

/// Answer to a single lookup, reduced to what the scheduler needs.
#[derive(Debug, Clone, Default)]
pub struct DnsAnswer {
    /// TTLs of answer records whose type matches the queried type, in
    /// response order.
    pub ttls: Vec<u32>,
    /// Response code as text ("NOERROR", "NXDOMAIN", ...), for logging.
    pub response_status: &'static str,
}

impl DnsAnswer {
    pub fn new(ttls: Vec<u32>) -> Self {
        Self {
            ttls,
            response_status: "NOERROR",
        }
    }

    pub fn first_ttl(&self) -> Option<u32> {
        self.ttls.first().copied()
    }
}

/// Resolver capability the resolution pipeline queries through.
///
/// Implementations must bound every call by their own timeout and retry
/// policy and fail with an error instead of hanging.
#[async_trait]
pub trait DnsLookup: Send + Sync {
    async fn lookup(&self, name: &str, record_type: RecordType) -> Result<DnsAnswer, DomainError>;
}
