use std::sync::Arc;
use warmdns_application::services::{
    PipelineSettings, Resolution, ResolutionPipeline, ResolutionStrategy,
};
use warmdns_domain::{DomainError, RecordType, WarmEntry};

mod helpers;
use helpers::MockDnsLookup;

fn settings() -> PipelineSettings {
    PipelineSettings {
        pin_min_ttl: 10,
        static_delay_secs: 7,
        flexible_min_secs: 300,
        flexible_max_secs: 600,
    }
}

fn pipeline(lookup: Arc<MockDnsLookup>) -> ResolutionPipeline {
    ResolutionPipeline::new(lookup, settings())
}

// ============================================================================
// Direct strategy
// ============================================================================

#[tokio::test]
async fn test_direct_uses_first_record_ttl() {
    let lookup = Arc::new(MockDnsLookup::new());
    lookup
        .set_ttls("www.example.com", RecordType::A, vec![120, 30])
        .await;

    let resolution = pipeline(lookup.clone())
        .resolve(&WarmEntry::due_now("www.example.com", RecordType::A))
        .await;

    assert_eq!(
        resolution,
        Resolution {
            ttl: 120,
            strategy: Some(ResolutionStrategy::Direct),
        }
    );
}

#[tokio::test]
async fn test_direct_pins_low_ttl() {
    let lookup = Arc::new(MockDnsLookup::new());
    for raw_ttl in [0, 1, 9] {
        lookup
            .set_ttls("volatile.example.com", RecordType::A, vec![raw_ttl])
            .await;
        let resolution = pipeline(lookup.clone())
            .resolve(&WarmEntry::due_now("volatile.example.com", RecordType::A))
            .await;
        assert_eq!(resolution.ttl, 10, "raw ttl {} must be pinned", raw_ttl);
    }
}

#[tokio::test]
async fn test_direct_success_short_circuits() {
    let lookup = Arc::new(MockDnsLookup::new());
    lookup
        .set_ttls("www.example.com", RecordType::AAAA, vec![60])
        .await;

    let resolution = pipeline(lookup.clone())
        .resolve(&WarmEntry::due_now("www.example.com", RecordType::AAAA))
        .await;

    assert_eq!(resolution.strategy, Some(ResolutionStrategy::Direct));
    assert_eq!(lookup.call_count(), 1);
    assert!(!lookup.was_queried("example.com", RecordType::SOA).await);
}

// ============================================================================
// SOA fallback
// ============================================================================

#[tokio::test]
async fn test_soa_fallback_queries_parent_zone() {
    let lookup = Arc::new(MockDnsLookup::new());
    lookup
        .set_ttls("example.com", RecordType::SOA, vec![3600])
        .await;

    let resolution = pipeline(lookup.clone())
        .resolve(&WarmEntry::due_now("missing.example.com", RecordType::A))
        .await;

    assert_eq!(
        resolution,
        Resolution {
            ttl: 3600,
            strategy: Some(ResolutionStrategy::Soa),
        }
    );
    assert_eq!(
        lookup.calls().await,
        vec![
            ("missing.example.com".to_string(), RecordType::A),
            ("example.com".to_string(), RecordType::SOA),
        ]
    );
}

#[tokio::test]
async fn test_soa_pins_low_ttl() {
    let lookup = Arc::new(MockDnsLookup::new());
    lookup.set_ttls("example.com", RecordType::SOA, vec![3]).await;

    let resolution = pipeline(lookup)
        .resolve(&WarmEntry::due_now("missing.example.com", RecordType::A))
        .await;

    assert_eq!(resolution.ttl, 10);
    assert_eq!(resolution.strategy, Some(ResolutionStrategy::Soa));
}

#[tokio::test]
async fn test_lookup_error_falls_through_to_soa() {
    let lookup = Arc::new(MockDnsLookup::new());
    lookup
        .set_error("slow.example.com", RecordType::A, DomainError::QueryTimeout)
        .await;
    lookup
        .set_ttls("example.com", RecordType::SOA, vec![900])
        .await;

    let resolution = pipeline(lookup)
        .resolve(&WarmEntry::due_now("slow.example.com", RecordType::A))
        .await;

    assert_eq!(resolution.ttl, 900);
    assert_eq!(resolution.strategy, Some(ResolutionStrategy::Soa));
}

#[tokio::test]
async fn test_single_label_skips_soa_lookup() {
    let lookup = Arc::new(MockDnsLookup::new());

    let resolution = pipeline(lookup.clone())
        .resolve(&WarmEntry::due_now("localhost", RecordType::A))
        .await;

    assert_eq!(resolution.strategy, Some(ResolutionStrategy::FlexibleDelay));
    assert_eq!(lookup.call_count(), 1);
}

// ============================================================================
// Flexible and static delay
// ============================================================================

#[tokio::test]
async fn test_flexible_delay_within_bounds_when_lookups_fail() {
    let lookup = Arc::new(MockDnsLookup::new());
    let pipeline = pipeline(lookup);
    let entry = WarmEntry::due_now("nxdomain.example.com", RecordType::A);

    for _ in 0..200 {
        let resolution = pipeline.resolve(&entry).await;
        assert_eq!(resolution.strategy, Some(ResolutionStrategy::FlexibleDelay));
        assert!(
            (300..600).contains(&resolution.ttl),
            "ttl {} out of range",
            resolution.ttl
        );
    }
}

#[tokio::test]
async fn test_static_delay_strategy() {
    let lookup = Arc::new(MockDnsLookup::new());
    let pipeline = ResolutionPipeline::with_strategies(
        lookup,
        settings(),
        vec![ResolutionStrategy::Direct, ResolutionStrategy::StaticDelay],
    );

    let resolution = pipeline
        .resolve(&WarmEntry::due_now("nxdomain.example.com", RecordType::A))
        .await;

    assert_eq!(
        resolution,
        Resolution {
            ttl: 7,
            strategy: Some(ResolutionStrategy::StaticDelay),
        }
    );
}

#[tokio::test]
async fn test_exhausted_chain_falls_back_to_static_delay() {
    let lookup = Arc::new(MockDnsLookup::new());
    let pipeline = ResolutionPipeline::with_strategies(
        lookup,
        settings(),
        vec![ResolutionStrategy::Direct, ResolutionStrategy::Soa],
    );

    let resolution = pipeline
        .resolve(&WarmEntry::due_now("nxdomain.example.com", RecordType::A))
        .await;

    assert_eq!(resolution, Resolution { ttl: 7, strategy: None });
}

#[tokio::test]
async fn test_empty_chain_falls_back_to_static_delay() {
    let lookup = Arc::new(MockDnsLookup::new());
    let pipeline = ResolutionPipeline::with_strategies(lookup.clone(), settings(), vec![]);

    let resolution = pipeline
        .resolve(&WarmEntry::due_now("example.com", RecordType::A))
        .await;

    assert_eq!(resolution.ttl, 7);
    assert_eq!(lookup.call_count(), 0);
}
