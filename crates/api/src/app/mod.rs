//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared snapshot + policy handed to handlers
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(services: services::AppServices) -> Router {
    let services = Arc::new(services);

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::trace_requests))
                .layer(Extension(services)),
        )
}
