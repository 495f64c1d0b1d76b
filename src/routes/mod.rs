//! Route tables: product CRUD plus health, readiness, version and API docs.

mod common;
mod product;

pub use common::common_routes_with_ready;
pub use product::product_routes;

use axum::http::StatusCode;

/// Empty 404 for unmatched paths and unsupported methods on known paths.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
