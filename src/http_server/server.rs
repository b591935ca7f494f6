//! # HTTP Server
//!
//! Combines the book and health routers with CORS and request tracing.

use std::future::Future;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::books::BookService;
use crate::observability::{log_event, Event};

use super::book_routes::book_routes;
use super::config::HttpServerConfig;
use super::observability_routes::health_routes;

/// HTTP server for the bookshelf API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Server with default configuration and an empty shelf
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default(), BookService::in_memory())
    }

    /// Server with custom configuration over the given service
    pub fn with_config(config: HttpServerConfig, service: BookService) -> Self {
        let router = Self::build_router(&config, service);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(config: &HttpServerConfig, service: BookService) -> Router {
        Router::new()
            .merge(health_routes())
            .merge(book_routes(service))
            .layer(TraceLayer::new_for_http())
            .layer(Self::cors_layer(config))
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        self.start_with_shutdown(async {
            // Also stops if the signal handler cannot be installed.
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
    }

    /// Serve until `shutdown` resolves
    pub async fn start_with_shutdown<F>(self, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.socket_addr();
        tracing::info!(event = %Event::ServerStarting, addr = %addr);

        let listener = TcpListener::bind(&addr).await?;
        let local = listener.local_addr()?.to_string();
        tracing::info!(event = %Event::ServerListening, addr = %local);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        log_event(Event::ServerStopped);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
