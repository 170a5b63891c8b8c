//! # Movie REST API Module
//!
//! HTTP-style handlers for CRUD and exact-match search over the movie
//! collection, with a single error classification point per handler.

pub mod errors;
pub mod handler;
pub mod parser;
pub mod response;
pub mod server;

pub use errors::{classify, RestError, RestResult};
pub use handler::{HandlerResult, MovieHandlers};
pub use parser::SearchQuery;
pub use response::ApiResponse;
pub use server::RestServer;
