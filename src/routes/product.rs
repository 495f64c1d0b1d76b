//! Product CRUD routes.

use super::not_found;
use crate::handlers::product::{create_product, delete_product, get_product, update_product};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/product", post(create_product).fallback(not_found))
        .route(
            "/product/:id",
            get(get_product)
                .put(update_product)
                .delete(delete_product)
                .fallback(not_found),
        )
        .with_state(state)
}
