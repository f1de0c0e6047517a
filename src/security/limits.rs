//! Request size limits.

use tower_http::limit::RequestBodyLimitLayer;

use crate::config::SecurityConfig;

/// Reject bodies larger than `security.max_body_size` with 413.
pub fn body_limit_layer(config: &SecurityConfig) -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(config.max_body_size)
}
