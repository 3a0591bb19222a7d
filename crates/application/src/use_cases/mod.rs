pub mod entries;

pub use entries::{
    AddEntriesUseCase, CountEntriesUseCase, EntryRequest, GetEntriesUseCase,
    LoadRandomEntriesUseCase,
};
