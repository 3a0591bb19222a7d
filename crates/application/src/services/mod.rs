mod bulk_loader;
mod refresh_queue;
mod resolution_pipeline;

pub use bulk_loader::{stagger_bucket_size, stagger_offset_secs, BulkLoader, SeedLoadReport};
pub use refresh_queue::RefreshQueue;
pub use resolution_pipeline::{
    parent_zone, PipelineSettings, Resolution, ResolutionPipeline, ResolutionStrategy,
};
