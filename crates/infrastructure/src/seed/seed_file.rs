use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;
use warmdns_application::ports::{SeedLines, SeedSource};
use warmdns_domain::DomainError;

/// Seed list stored as a newline-delimited text file.
///
/// The file is read fresh on every call. Lines, blank ones included, are
/// handed to the loader unvalidated so their positions match the file.
pub struct SeedFileSource {
    path: PathBuf,
}

impl SeedFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SeedSource for SeedFileSource {
    async fn read_lines(&self) -> Result<SeedLines, DomainError> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::IoError(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        let lines: SeedLines = content.lines().map(str::to_string).collect();

        debug!(path = %self.path.display(), lines = lines.len(), "Seed file read");
        Ok(lines)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
