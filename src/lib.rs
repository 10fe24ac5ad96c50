pub mod charts;
pub mod config;
pub mod error;
pub mod fetch;
pub mod grouping;
pub mod infra;
pub mod output;
pub mod services;
pub mod summary;
pub mod table;
pub mod ticks;

pub use error::SummaryError;
