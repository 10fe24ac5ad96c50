use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::services::{SummaryKind, SummaryProvider};
use crate::summary::{CircuitSummary, ConstructorSummary, DriverSummary};

/// Serves summaries saved on disk as `<root>/<kind>/<race_id>.json`.
///
/// The layout mirrors the API routes, so a directory of responses captured
/// with `curl` can be replayed offline.
pub struct DirectorySummaryProvider {
    root: PathBuf,
}

impl DirectorySummaryProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn summary_path(&self, kind: SummaryKind, race_id: u32) -> PathBuf {
        self.root
            .join(kind.path_segment())
            .join(format!("{race_id}.json"))
    }

    #[tracing::instrument(skip(self))]
    async fn load<T: DeserializeOwned>(&self, kind: SummaryKind, race_id: u32) -> Result<T> {
        let path = self.summary_path(kind, race_id);
        let content = tokio::fs::read(&path)
            .await
            .with_context(|| format!("failed to read summary file {}", path.display()))?;
        let summary = decode(&path, &content)?;
        info!(path = %path.display(), "Summary loaded");
        Ok(summary)
    }
}

fn decode<T: DeserializeOwned>(path: &Path, content: &[u8]) -> Result<T> {
    serde_json::from_slice(content).with_context(|| format!("invalid summary JSON in {}", path.display()))
}

#[async_trait]
impl SummaryProvider for DirectorySummaryProvider {
    async fn circuit_summary(&self, race_id: u32) -> Result<CircuitSummary> {
        self.load(SummaryKind::Circuit, race_id).await
    }

    async fn driver_summary(&self, race_id: u32) -> Result<DriverSummary> {
        self.load(SummaryKind::Drivers, race_id).await
    }

    async fn constructor_summary(&self, race_id: u32) -> Result<ConstructorSummary> {
        self.load(SummaryKind::Constructors, race_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let provider = DirectorySummaryProvider::new(dir.path());

        let err = provider.driver_summary(3).await.unwrap_err();
        assert!(err.to_string().contains("race_driver_summary"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = DirectorySummaryProvider::new(dir.path());
        let path = provider.summary_path(SummaryKind::Constructors, 5);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let err = provider.constructor_summary(5).await.unwrap_err();
        assert!(err.to_string().contains("invalid summary JSON"));
    }
}
