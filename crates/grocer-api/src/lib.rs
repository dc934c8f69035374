//! HTTP client for the grocery list API.
//!
//! One explicitly constructed [`ApiClient`] per consumer, plus a
//! fixed-interval [`SharedListWatcher`](watch::SharedListWatcher) for
//! keeping a shared view fresh.

pub mod client;
pub mod config;
pub mod error;
pub mod watch;

pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_API_URL};
pub use error::{ApiError, ApiResult};
pub use watch::{ListSnapshot, SharedListWatcher, WatchEvent, DEFAULT_POLL_INTERVAL};
