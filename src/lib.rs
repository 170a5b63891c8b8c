//! moviedb - movie catalogue REST service
//!
//! CRUD and exact-match search over a single movie collection held in
//! DynamoDB (or in memory for local runs and tests).

pub mod cli;
pub mod http_server;
pub mod rest_api;
pub mod schema;
pub mod store;
