//! Client for the backend race summary API.

mod client;

pub use client::ApiSummaryClient;
