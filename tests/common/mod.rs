//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use cheeseria::http::{build_router, AppState, HttpServer};
use cheeseria::{CatalogConfig, CatalogStore, Shutdown};
use serde_json::Value;
use tower::ServiceExt;

/// Response pieces a test cares about.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("body should be valid JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("body should be UTF-8")
    }
}

/// Router over a freshly seeded store with default configuration.
pub fn app() -> Router {
    app_with(CatalogConfig::default())
}

pub fn app_with(config: CatalogConfig) -> Router {
    let state = AppState::new(&config, Arc::new(CatalogStore::seeded()));
    build_router(&config, state)
}

/// Drive one request through the router without a socket.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request should build");

    send_request(app, request).await
}

pub async fn send_request(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("response expected");

    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body should be readable")
        .to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Start a real server on an ephemeral loopback port.
pub async fn spawn_server(config: CatalogConfig) -> (SocketAddr, Shutdown) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}
