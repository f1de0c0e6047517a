//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the item resource and asset routes
//! - Wire up middleware (tracing, request ID, metrics, limits, CORS, headers)
//! - Bind server to listener
//! - Stop on OS signal or shutdown broadcast

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::Request,
    middleware,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::catalog::CatalogStore;
use crate::config::CatalogConfig;
use crate::http::assets::{images_service, spa_fallback};
use crate::http::items::{create_item, delete_item, get_item, list_items, update_item};
use crate::http::middleware::track_metrics;
use crate::http::request::RequestIdExt;
use crate::lifecycle::signals::shutdown_signal;
use crate::security::{apply_security_headers, body_limit_layer, cors_layer};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub strict_validation: bool,
    pub spa_index: Arc<PathBuf>,
}

impl AppState {
    pub fn new(config: &CatalogConfig, store: Arc<CatalogStore>) -> Self {
        Self {
            store,
            strict_validation: config.security.strict_validation,
            spa_index: Arc::new(PathBuf::from(&config.assets.spa_index)),
        }
    }
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(config: &CatalogConfig, state: AppState) -> Router {
    let mut router = Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .nest_service("/images", images_service(&config.assets.images_dir))
        .fallback(spa_fallback)
        .method_not_allowed_fallback(spa_fallback)
        .with_state(state);

    if config.cors.enabled {
        router = router.layer(cors_layer(&config.cors));
    }
    if config.security.enable_headers {
        router = apply_security_headers(router);
    }

    router
        .layer(body_limit_layer(&config.security))
        .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
        .layer(middleware::from_fn(track_metrics))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request.request_id(),
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// HTTP server for the catalog.
pub struct HttpServer {
    router: Router,
    store: Arc<CatalogStore>,
}

impl HttpServer {
    /// Create a server over a freshly seeded store.
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_store(&config, Arc::new(CatalogStore::seeded()))
    }

    /// Create a server over an existing store.
    pub fn with_store(config: &CatalogConfig, store: Arc<CatalogStore>) -> Self {
        let state = AppState::new(config, store.clone());
        let router = build_router(config, state);

        Self { router, store }
    }

    /// Run the server until an OS signal or a shutdown broadcast arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            items = self.store.len(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
