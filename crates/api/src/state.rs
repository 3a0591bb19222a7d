use std::sync::Arc;
use warmdns_application::use_cases::{
    AddEntriesUseCase, CountEntriesUseCase, GetEntriesUseCase, LoadRandomEntriesUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub add_entries: Arc<AddEntriesUseCase>,
    pub count_entries: Arc<CountEntriesUseCase>,
    pub get_entries: Arc<GetEntriesUseCase>,
    pub load_random: Arc<LoadRandomEntriesUseCase>,
}
