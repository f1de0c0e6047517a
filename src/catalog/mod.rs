//! Catalog subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handler
//!     → ItemDraft (deserialized request body)
//!     → CatalogStore (lock, scan/mutate, unlock)
//!     → Item (cloned out of the store)
//!     → serialized by the handler
//! ```
//!
//! The store is constructed once at startup and handed to the HTTP layer
//! through the application state. It is never persisted: every restart begins
//! from the seed set in [`seed`].

pub mod error;
pub mod item;
pub mod seed;
pub mod store;

pub use error::CatalogError;
pub use item::{Item, ItemDraft};
pub use store::CatalogStore;
