//! Request ID handling.
//!
//! IDs are generated by `tower_http::request_id` when the client sends none
//! and echoed back on the response. This module only reads them.

use axum::http::Request;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Read access to the correlation ID of a request.
pub trait RequestIdExt {
    /// The request ID, or `"unknown"` when absent or not valid UTF-8.
    fn request_id(&self) -> &str;
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> &str {
        self.headers()
            .get(X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_present() {
        let request = Request::builder()
            .header("x-request-id", "abc-123")
            .body(())
            .unwrap();
        assert_eq!(request.request_id(), "abc-123");
    }

    #[test]
    fn test_request_id_header_is_case_insensitive() {
        let request = Request::builder()
            .header("X-Request-Id", "Mixed-Case")
            .body(())
            .unwrap();
        assert_eq!(request.request_id(), "Mixed-Case");
    }

    #[test]
    fn test_request_id_missing() {
        let request = Request::builder().body(()).unwrap();
        assert_eq!(request.request_id(), "unknown");
    }
}
