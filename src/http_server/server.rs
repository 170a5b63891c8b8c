//! # HTTP Server
//!
//! Binds the listener and serves the movie router.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::rest_api::{MovieHandlers, RestServer};

use super::config::HttpServerConfig;

/// HTTP Server for the movie API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, handlers: MovieHandlers) -> Self {
        let router = Self::build_router(handlers);
        Self { config, router }
    }

    /// Build the router with request tracing
    fn build_router(handlers: MovieHandlers) -> Router {
        RestServer::new(handlers)
            .router()
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "movie API listening");
        info!("  - GET|POST        /movies");
        info!("  - GET|PUT|DELETE  /movies/:id");
        info!("  - GET             /movies/search/movie_name=<value>");

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
