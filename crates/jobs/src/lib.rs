pub mod refresh;
pub mod runner;

pub use refresh::{RefreshJob, RefreshTimings, TickOutcome};
pub use runner::JobRunner;
