//! Concrete providers behind the [`crate::services`] traits.
//!
//! [`ApiSummaryClient`] talks to the backend over HTTP.
//! [`DirectorySummaryProvider`] replays saved payloads from disk.
//! [`ImageMap`] answers image lookups from a local title → URL map.

pub mod api;
pub mod files;
pub mod images;

pub use api::ApiSummaryClient;
pub use files::DirectorySummaryProvider;
pub use images::ImageMap;
