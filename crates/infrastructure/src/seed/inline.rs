use async_trait::async_trait;
use warmdns_application::ports::{SeedLines, SeedSource};
use warmdns_domain::DomainError;

/// Seed list held in memory. Used when no seed file is configured.
#[derive(Debug, Clone, Default)]
pub struct InlineSeedSource {
    lines: SeedLines,
}

impl InlineSeedSource {
    pub fn new(lines: SeedLines) -> Self {
        Self { lines }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SeedSource for InlineSeedSource {
    async fn read_lines(&self) -> Result<SeedLines, DomainError> {
        Ok(self.lines.clone())
    }

    fn describe(&self) -> String {
        format!("inline ({} lines)", self.lines.len())
    }
}
