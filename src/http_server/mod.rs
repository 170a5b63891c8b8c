//! # HTTP Server Module
//!
//! Serves the movie REST API over an Axum listener.
//!
//! # Endpoints
//!
//! - `/movies` - List and create
//! - `/movies/:id` - Read, replace and delete
//! - `/movies/search/movie_name=<value>` - Exact-match search

pub mod config;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
