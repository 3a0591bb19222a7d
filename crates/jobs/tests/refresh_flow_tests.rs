use std::sync::Arc;
use warmdns_application::services::{PipelineSettings, RefreshQueue, ResolutionPipeline};
use warmdns_application::use_cases::{
    AddEntriesUseCase, CountEntriesUseCase, EntryRequest, GetEntriesUseCase,
};
use warmdns_domain::{now_millis, RecordType};
use warmdns_jobs::{RefreshJob, RefreshTimings, TickOutcome};

mod helpers;
use helpers::MockDnsLookup;

#[tokio::test]
async fn test_added_entry_survives_a_refresh_cycle() {
    let queue = RefreshQueue::spawn();
    let lookup = Arc::new(MockDnsLookup::new());
    lookup.set_ttls("example.com", RecordType::A, vec![600]).await;

    let pipeline = Arc::new(ResolutionPipeline::new(
        lookup.clone(),
        PipelineSettings {
            pin_min_ttl: 10,
            static_delay_secs: 10,
            flexible_min_secs: 300,
            flexible_max_secs: 600,
        },
    ));
    let job = RefreshJob::new(
        queue.clone(),
        pipeline,
        RefreshTimings {
            idle_sleep_ms: 1000,
            low_threshold_ms: 1000,
            poll_interval_ms: 50,
        },
    );

    let add = AddEntriesUseCase::new(queue.clone());
    let count = CountEntriesUseCase::new(queue.clone());
    let dump = GetEntriesUseCase::new(queue.clone());

    let added_at = now_millis();
    let size = add
        .execute(vec![EntryRequest {
            name: "example.com".to_string(),
            record_type: "A".to_string(),
        }])
        .await
        .unwrap();
    assert_eq!(size, 1);
    assert_eq!(count.execute().await.unwrap(), 1);

    let pairs = dump.execute().await.unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].0.as_ref(), "example.com");
    assert_eq!(pairs[0].1, RecordType::A);

    let TickOutcome::Dispatched(handle) = job.tick().await.unwrap() else {
        panic!("Freshly added entry should be due");
    };
    handle.await.unwrap();

    assert_eq!(count.execute().await.unwrap(), 1);
    let entry = queue.pop().await.unwrap().unwrap();
    assert!(entry.due_at >= added_at + 600_000);
    assert_eq!(lookup.call_count(), 1);
}
