#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use std::sync::Arc;
use warmdns_api::{create_api_routes, AppState};
use warmdns_application::ports::{SeedLines, SeedSource};
use warmdns_application::services::{BulkLoader, RefreshQueue};
use warmdns_application::use_cases::{
    AddEntriesUseCase, CountEntriesUseCase, GetEntriesUseCase, LoadRandomEntriesUseCase,
};
use warmdns_domain::DomainError;

pub struct StaticSeedSource(pub Vec<String>);

#[async_trait]
impl SeedSource for StaticSeedSource {
    async fn read_lines(&self) -> Result<SeedLines, DomainError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

pub fn create_test_app(queue: RefreshQueue, seed: &[&str]) -> Router {
    let source = Arc::new(StaticSeedSource(seed.iter().map(|l| l.to_string()).collect()));
    let loader = Arc::new(BulkLoader::new(queue.clone(), source));

    let state = AppState {
        add_entries: Arc::new(AddEntriesUseCase::new(queue.clone())),
        count_entries: Arc::new(CountEntriesUseCase::new(queue.clone())),
        get_entries: Arc::new(GetEntriesUseCase::new(queue)),
        load_random: Arc::new(LoadRandomEntriesUseCase::new(loader, 50)),
    };

    create_api_routes(state)
}
