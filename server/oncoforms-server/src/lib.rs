//! OncoForms Server - clinical form intake API
//!
//! This library provides the core functionality of the OncoForms HTTP server:
//! typed clinical form submission endpoints backed by a shared PostgreSQL
//! connection pool, with a uniform JSON response envelope.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod validation;

// Re-export commonly used types
pub use error::*;
pub use server::OncoformsServer;

use axum::{extract::DefaultBodyLimit, middleware::from_fn, Router};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create the main application router with all routes and middleware
pub fn create_app(server: OncoformsServer) -> Router {
    let static_files = ServeDir::new(&server.config.static_dir);

    routes::create_routes()
        // Static assets from the working directory, behind every API route
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::create_cors_layer())
                .layer(from_fn(middleware::request_logging_middleware))
                .layer(DefaultBodyLimit::max(server.config.max_body_bytes)),
        )
        .with_state(server)
}
