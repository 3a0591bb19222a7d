mod add_entries;
mod count_entries;
mod get_entries;
mod load_random;

pub use add_entries::{AddEntriesUseCase, EntryRequest};
pub use count_entries::CountEntriesUseCase;
pub use get_entries::GetEntriesUseCase;
pub use load_random::LoadRandomEntriesUseCase;
