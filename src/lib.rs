//! Fetch WakaTime usage statistics for a single user.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod models;
pub mod utils;

pub use error::FetchError;
pub use fetcher::{fetch_wakatime_stats, resolve_api_domain, stats_url};
pub use models::{StatsPayload, WakaTimeStats};
