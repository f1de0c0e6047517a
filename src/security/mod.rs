//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request:
//!     → cors.rs (origin policy, preflight)
//!     → limits.rs (request body size)
//!     → Pass to routing
//! Outgoing response:
//!     → headers.rs (CSP, nosniff, cross-origin resource policy)
//! ```
//!
//! # Design Decisions
//! - Every layer is driven by `CatalogConfig`, nothing is hardcoded
//! - Wildcard CORS is allowed for development but logged loudly

pub mod cors;
pub mod headers;
pub mod limits;

pub use cors::cors_layer;
pub use headers::apply_security_headers;
pub use limits::body_limit_layer;
