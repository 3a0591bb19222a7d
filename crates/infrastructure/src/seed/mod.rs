mod inline;
mod seed_file;

pub use inline::InlineSeedSource;
pub use seed_file::SeedFileSource;
