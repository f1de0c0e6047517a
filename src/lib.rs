//! Cheeseria catalog service library.
//!
//! An in-memory product catalog exposed over HTTP/JSON, with static image
//! serving and a single-page app fallback.

pub mod catalog;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use catalog::{CatalogStore, Item, ItemDraft};
pub use config::CatalogConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
