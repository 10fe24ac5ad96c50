//! Capabilities the presentation layer depends on.
//!
//! [`SummaryProvider`] supplies race summary payloads and [`ImageProvider`]
//! resolves illustrative images. The transformation modules never call either
//! one; the binary wires a concrete provider in and hands the resolved
//! payloads to them.

use anyhow::Result;
use std::fmt;

use crate::summary::{CircuitSummary, ConstructorSummary, DriverSummary};

/// The three summary payloads the backend serves per race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryKind {
    Circuit,
    Drivers,
    Constructors,
}

impl SummaryKind {
    /// Path segment used both by the API route and the on-disk layout.
    pub fn path_segment(self) -> &'static str {
        match self {
            SummaryKind::Circuit => "race_circuit_summary",
            SummaryKind::Drivers => "race_driver_summary",
            SummaryKind::Constructors => "race_constructor_summary",
        }
    }
}

impl fmt::Display for SummaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Source of race summaries, keyed by race id.
#[async_trait::async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn circuit_summary(&self, race_id: u32) -> Result<CircuitSummary>;

    async fn driver_summary(&self, race_id: u32) -> Result<DriverSummary>;

    async fn constructor_summary(&self, race_id: u32) -> Result<ConstructorSummary>;
}

/// Resolves a page title (circuit or race name) to an image URL.
#[async_trait::async_trait]
pub trait ImageProvider: Send + Sync {
    async fn image_url(&self, title: &str) -> Result<Option<String>>;
}
