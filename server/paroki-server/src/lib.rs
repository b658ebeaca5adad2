//! Paroki Server - church ushering scheduling API
//!
//! This library provides the core functionality of the Paroki HTTP server:
//! schedule management endpoints, usher-name validation, and the per-church
//! PPG-requirement policy.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod services;
pub mod validation;

// Re-export commonly used types
pub use error::*;
pub use server::ParokiServer;

use axum::{middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(server: ParokiServer) -> Router {
    routes::create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::create_cors_layer())
                .layer(from_fn(middleware::request_timing_middleware)),
        )
        .with_state(server)
}
