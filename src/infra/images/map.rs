use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;

use crate::services::ImageProvider;

/// Maps page titles to image URLs.
///
/// Stored as a plain JSON object on disk:
/// ```json
/// {
///   "Bahrain_International_Circuit": "https://example.org/bahrain.jpg",
///   "Circuit_de_Monaco": "https://example.org/monaco.jpg"
/// }
/// ```
/// Titles are matched after replacing spaces with underscores, so
/// `"Circuit de Monaco"` finds the second entry.
#[derive(Debug, Default)]
pub struct ImageMap {
    entries: HashMap<String, String>,
}

impl ImageMap {
    /// Loads the map from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read image map {}", path.display()))?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(content)?;
        let entries = raw
            .into_iter()
            .map(|(title, url)| (page_title(&title), url))
            .collect();
        Ok(Self { entries })
    }

    /// Returns the URL for `title`, if one is configured.
    pub fn get(&self, title: &str) -> Option<&str> {
        self.entries.get(&page_title(title)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalises a display name into a page title.
pub fn page_title(name: &str) -> String {
    name.trim().replace(' ', "_")
}

#[async_trait]
impl ImageProvider for ImageMap {
    async fn image_url(&self, title: &str) -> Result<Option<String>> {
        Ok(self.get(title).map(str::to_string))
    }
}
