//! warmdns Domain Layer
pub mod config;
pub mod dns_record;
pub mod due_queue;
pub mod errors;
pub mod seed;
pub mod warm_entry;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::RecordType;
pub use due_queue::DueQueue;
pub use errors::DomainError;
pub use seed::{numbered_lines, SeedEntry};
pub use warm_entry::{now_millis, WarmEntry};
