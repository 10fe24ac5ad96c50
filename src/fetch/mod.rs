//! HTTP access behind the [`HttpClient`] seam.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result, anyhow};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Issues a GET for `url` and returns the body of a successful response.
///
/// Non-2xx responses are errors carrying the status and response body.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(
        reqwest::Method::GET,
        url.parse().with_context(|| format!("invalid URL '{url}'"))?,
    );

    let resp = client
        .execute(req)
        .await
        .with_context(|| format!("request to '{url}' failed"))?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(anyhow!("'{url}' returned status {status}: {body}"));
    }

    let bytes = resp.bytes().await?;
    debug!(url, bytes = bytes.len(), "Response received");
    Ok(bytes.to_vec())
}

/// Like [`fetch_bytes`], decoding the body as JSON.
pub async fn fetch_json<C: HttpClient, T: DeserializeOwned>(client: &C, url: &str) -> Result<T> {
    let bytes = fetch_bytes(client, url).await?;
    serde_json::from_slice(&bytes).with_context(|| format!("failed to decode JSON from '{url}'"))
}
