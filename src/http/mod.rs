//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID lookup for spans)
//!     → items.rs (path/body parsing, store calls)
//!     → error.rs (domain error → status + plain-text body)
//!     → assets.rs (images and single-page app fallback)
//!     → Send to client
//! ```

pub mod assets;
pub mod error;
pub mod items;
pub mod middleware;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::{build_router, AppState, HttpServer};
