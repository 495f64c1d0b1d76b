//! Response helpers shared by the product handlers.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Body returned by `DELETE /product/{id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResult {
    #[schema(value_type = String)]
    pub result: &'static str,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn deleted() -> (StatusCode, Json<DeleteResult>) {
    ok(DeleteResult { result: "success" })
}
