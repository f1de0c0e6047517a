//! Client library for the Cheeseria catalog.
//!
//! - [`client`]: HTTP access to the item resource
//! - [`calculator`]: selection state and total price computation
//! - [`gallery`]: text rendering of the catalog
//! - [`storefront`]: one-shot catalog load feeding the above

pub mod calculator;
pub mod client;
pub mod error;
pub mod gallery;
pub mod storefront;
pub mod types;

pub use calculator::{Calculator, Total};
pub use client::CatalogClient;
pub use error::ClientError;
pub use storefront::Storefront;
pub use types::{Item, ItemInput};
