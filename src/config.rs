//! Runtime configuration read from the environment.
//!
//! `.env` files are loaded by the binary through `dotenvy` before this runs,
//! and command-line flags override whatever is found here.

use anyhow::{Context, Result, bail};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:9000";
pub const DEFAULT_TICK_COUNT: usize = 6;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Base URL of the summary API, or a directory of saved summaries.
    pub source: String,
    /// Number of ticks on lap-time axes.
    pub tick_count: usize,
    pub http_timeout: Duration,
    /// JSON file mapping page titles to image URLs.
    pub image_map: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_API_BASE_URL.to_string(),
            tick_count: DEFAULT_TICK_COUNT,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            image_map: None,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup("API_BASE_URL") {
            config.source = url;
        }
        if let Some(raw) = lookup("DASHBOARD_TICK_COUNT") {
            config.tick_count = raw
                .trim()
                .parse()
                .with_context(|| format!("DASHBOARD_TICK_COUNT is not a number: '{raw}'"))?;
        }
        if let Some(raw) = lookup("DASHBOARD_HTTP_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("DASHBOARD_HTTP_TIMEOUT_SECS is not a number: '{raw}'"))?;
            config.http_timeout = Duration::from_secs(secs);
        }
        config.image_map = lookup("DASHBOARD_IMAGE_MAP").map(PathBuf::from);

        config.validate()?;
        Ok(config)
    }

    /// Rejects values the transformations cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.tick_count < 2 {
            bail!("tick count must be at least 2, got {}", self.tick_count);
        }
        if self.http_timeout.is_zero() {
            bail!("HTTP timeout must be greater than zero");
        }
        Ok(())
    }

    /// True when `source` points at the HTTP API rather than a directory.
    pub fn is_remote(&self) -> bool {
        self.source.starts_with("http")
    }
}
