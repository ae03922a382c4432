use axum::{routing::get, Router};

pub mod alerts;
pub mod system;

/// Router for the `/api` tree.
pub fn router() -> Router {
    Router::new().route(
        "/companies/:company_id/alerts/low-stock",
        get(alerts::low_stock_alerts),
    )
}
