use async_trait::async_trait;
use reqwest::{Request, Response};

/// Executes prepared requests. Lets the summary client run against a real
/// `reqwest` client or a canned one in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
