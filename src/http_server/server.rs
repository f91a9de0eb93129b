//! # HTTP Server
//!
//! Serves the airline routes with CORS, request tracing and a per-request
//! timeout. The health check lives on a separate admin listener so that
//! no path on the main listener is taken away from airline names.

use std::future::{Future, IntoFuture};
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::registry::AirlineRegistry;

use super::airline_routes::{airline_routes, AirlineState};
use super::config::HttpServerConfig;
use super::observability_routes::health_routes;

/// HTTP server for the airline registry
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
    admin_router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration and a seeded
    /// registry
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_registry(config, AirlineRegistry::new())
    }

    /// Create a new HTTP server around an existing registry
    pub fn with_registry(config: HttpServerConfig, registry: AirlineRegistry) -> Self {
        let state = Arc::new(AirlineState::with_registry(registry));
        let router = Self::build_router(&config, state.clone());
        let admin_router = Self::build_admin_router(&config, state);
        Self {
            config,
            router,
            admin_router,
        }
    }

    /// Build the airline router
    fn build_router(config: &HttpServerConfig, state: Arc<AirlineState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| match s.parse() {
                    Ok(origin) => Some(origin),
                    Err(_) => {
                        warn!(origin = %s, "ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        airline_routes(state)
            .layer(TimeoutLayer::new(config.request_timeout()))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Build the admin router (health check)
    fn build_admin_router(config: &HttpServerConfig, state: Arc<AirlineState>) -> Router {
        health_routes(state)
            .layer(TimeoutLayer::new(config.request_timeout()))
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the admin router (for testing)
    pub fn admin_router(&self) -> Router {
        self.admin_router.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and run until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        self.start_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "failed to listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    /// Start the HTTP server, and the admin listener when an admin port is
    /// configured. Both shut down gracefully once `shutdown` resolves.
    pub async fn start_with_shutdown<F>(self, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        info!(addr = %listener.local_addr()?, "starting airline HTTP server");

        let admin_listener = match self.config.admin_socket_addr() {
            Some(addr) => {
                let admin_listener = TcpListener::bind(addr).await?;
                info!(addr = %admin_listener.local_addr()?, "starting admin HTTP server");
                Some(admin_listener)
            }
            None => None,
        };

        let (shutdown_sender, shutdown_receiver) = watch::channel(());
        tokio::spawn(async move {
            shutdown.await;
            info!("starting graceful shutdown for HTTP server...");
            let _ = shutdown_sender.send(());
        });

        let server = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown_receiver.clone()))
            .into_future();

        match admin_listener {
            Some(admin_listener) => {
                let admin = axum::serve(admin_listener, self.admin_router)
                    .with_graceful_shutdown(shutdown_signal(shutdown_receiver))
                    .into_future();
                tokio::try_join!(server, admin)?;
            }
            None => server.await?,
        }

        info!("HTTP server has been shut down");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves once shutdown is signalled or the sender is gone.
async fn shutdown_signal(mut receiver: watch::Receiver<()>) {
    let _ = receiver.changed().await;
}
