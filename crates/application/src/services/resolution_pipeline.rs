use crate::ports::DnsLookup;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use warmdns_domain::config::RefreshConfig;
use warmdns_domain::{DomainError, RecordType, WarmEntry};

/// Ways of deriving the next refresh interval for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStrategy {
    /// TTL of the first answer for the entry's own name and type.
    Direct,
    /// TTL of the parent zone's SOA record.
    Soa,
    /// Random delay in `[flexible_min, flexible_max)`.
    FlexibleDelay,
    /// Fixed delay.
    StaticDelay,
}

impl ResolutionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionStrategy::Direct => "direct",
            ResolutionStrategy::Soa => "soa",
            ResolutionStrategy::FlexibleDelay => "flexible_delay",
            ResolutionStrategy::StaticDelay => "static_delay",
        }
    }

    pub fn default_chain() -> Vec<ResolutionStrategy> {
        vec![
            ResolutionStrategy::Direct,
            ResolutionStrategy::Soa,
            ResolutionStrategy::FlexibleDelay,
        ]
    }
}

impl fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSettings {
    pub pin_min_ttl: u32,
    pub static_delay_secs: u32,
    pub flexible_min_secs: u32,
    pub flexible_max_secs: u32,
}

impl From<&RefreshConfig> for PipelineSettings {
    fn from(config: &RefreshConfig) -> Self {
        Self {
            pin_min_ttl: config.pin_min_ttl,
            static_delay_secs: config.static_delay_secs,
            flexible_min_secs: config.flexible_delay_min_secs,
            flexible_max_secs: config.flexible_delay_max_secs,
        }
    }
}

/// Outcome of a pipeline run. `strategy` is `None` when no strategy succeeded
/// and the static delay was used as a last resort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub ttl: u32,
    pub strategy: Option<ResolutionStrategy>,
}

/// Ordered strategy chain, tried until one succeeds.
pub struct ResolutionPipeline {
    lookup: Arc<dyn DnsLookup>,
    strategies: Vec<ResolutionStrategy>,
    settings: PipelineSettings,
}

impl ResolutionPipeline {
    pub fn new(lookup: Arc<dyn DnsLookup>, settings: PipelineSettings) -> Self {
        Self::with_strategies(lookup, settings, ResolutionStrategy::default_chain())
    }

    pub fn with_strategies(
        lookup: Arc<dyn DnsLookup>,
        settings: PipelineSettings,
        strategies: Vec<ResolutionStrategy>,
    ) -> Self {
        Self {
            lookup,
            strategies,
            settings,
        }
    }

    pub fn strategies(&self) -> &[ResolutionStrategy] {
        &self.strategies
    }

    /// Always yields a TTL; strategy failures fall through to the next one.
    pub async fn resolve(&self, entry: &WarmEntry) -> Resolution {
        for (index, strategy) in self.strategies.iter().enumerate() {
            match self.run(*strategy, entry).await {
                Ok(ttl) => {
                    trace!(
                        entry = %entry,
                        strategy = %strategy,
                        index,
                        ttl,
                        "strategy succeeded"
                    );
                    return Resolution {
                        ttl,
                        strategy: Some(*strategy),
                    };
                }
                Err(e) if e.is_resolution_error() => {
                    trace!(
                        entry = %entry,
                        strategy = %strategy,
                        index,
                        error = %e,
                        "strategy failed"
                    );
                }
                Err(e) => {
                    warn!(
                        entry = %entry,
                        strategy = %strategy,
                        error = %e,
                        "strategy failed unexpectedly"
                    );
                }
            }
        }

        debug!(
            entry = %entry,
            ttl = self.settings.static_delay_secs,
            "All strategies failed, using static delay"
        );
        Resolution {
            ttl: self.settings.static_delay_secs,
            strategy: None,
        }
    }

    async fn run(&self, strategy: ResolutionStrategy, entry: &WarmEntry) -> Result<u32, DomainError> {
        match strategy {
            ResolutionStrategy::Direct => self.direct(entry).await,
            ResolutionStrategy::Soa => self.soa(entry).await,
            ResolutionStrategy::FlexibleDelay => Ok(self.flexible_delay()),
            ResolutionStrategy::StaticDelay => Ok(self.settings.static_delay_secs),
        }
    }

    async fn direct(&self, entry: &WarmEntry) -> Result<u32, DomainError> {
        let answer = self.lookup.lookup(&entry.name, entry.record_type).await?;
        answer
            .first_ttl()
            .map(|ttl| self.pin(ttl))
            .ok_or_else(|| DomainError::NoMatchingRecords {
                name: entry.name.to_string(),
                record_type: entry.record_type.to_string(),
            })
    }

    async fn soa(&self, entry: &WarmEntry) -> Result<u32, DomainError> {
        let zone = parent_zone(&entry.name)?;
        let answer = self.lookup.lookup(zone, RecordType::SOA).await?;
        answer
            .first_ttl()
            .map(|ttl| self.pin(ttl))
            .ok_or_else(|| DomainError::NoMatchingRecords {
                name: zone.to_string(),
                record_type: RecordType::SOA.to_string(),
            })
    }

    fn flexible_delay(&self) -> u32 {
        let min = self.settings.flexible_min_secs;
        let max = self.settings.flexible_max_secs;
        if max <= min {
            return min;
        }
        fastrand::u32(min..max)
    }

    fn pin(&self, ttl: u32) -> u32 {
        ttl.max(self.settings.pin_min_ttl)
    }
}

/// Strips the leftmost label: `www.example.com` → `example.com`.
pub fn parent_zone(name: &str) -> Result<&str, DomainError> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    match trimmed.split_once('.') {
        Some((label, parent)) if !label.is_empty() && !parent.is_empty() => Ok(parent),
        _ => Err(DomainError::InsufficientLabels(name.to_string())),
    }
}
