//! Security response headers.
//!
//! Images are fetched cross-origin by the frontend dev server, so the
//! resource policy is `cross-origin` rather than helmet's `same-origin`.

use axum::{
    http::{HeaderName, HeaderValue},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
     font-src 'self' https://fonts.gstatic.com; \
     style-src 'self' https://fonts.googleapis.com; \
     script-src 'self'; \
     img-src 'self' data:; \
     base-uri 'self'; \
     form-action 'self'; \
     frame-ancestors 'self'; \
     object-src 'none'";

/// Add the security headers to every response that does not set them.
pub fn apply_security_headers(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("content-security-policy"),
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("cross-origin-resource-policy"),
            HeaderValue::from_static("cross-origin"),
        ))
}
