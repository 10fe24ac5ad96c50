use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::fetch::{HttpClient, fetch_json};
use crate::services::{SummaryKind, SummaryProvider};
use crate::summary::{CircuitSummary, ConstructorSummary, DriverSummary};

/// Reads race summaries from the backend's `/races/<kind>/<race_id>` routes.
pub struct ApiSummaryClient<C> {
    http: C,
    base_url: String,
}

impl<C: HttpClient> ApiSummaryClient<C> {
    pub fn new(http: C, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn summary_url(&self, kind: SummaryKind, race_id: u32) -> String {
        format!("{}/races/{}/{}", self.base_url, kind.path_segment(), race_id)
    }

    #[tracing::instrument(skip(self))]
    async fn load<T: DeserializeOwned>(&self, kind: SummaryKind, race_id: u32) -> Result<T> {
        let url = self.summary_url(kind, race_id);
        let summary = fetch_json(&self.http, &url).await?;
        info!(url = %url, "Summary loaded");
        Ok(summary)
    }
}

#[async_trait]
impl<C: HttpClient> SummaryProvider for ApiSummaryClient<C> {
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
