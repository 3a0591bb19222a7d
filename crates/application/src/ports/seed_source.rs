use async_trait::async_trait;
use warmdns_domain::DomainError;

/// Raw lines of a seed list, before validation.
pub type SeedLines = Vec<String>;

/// Where seed `<name> <record-type>` lines come from.
#[async_trait]
pub trait SeedSource: Send + Sync {
    async fn read_lines(&self) -> Result<SeedLines, DomainError>;

    /// Human-readable origin for log lines.
    fn describe(&self) -> String;
}
