//! Product CRUD handlers: read, create, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::model::{Product, ProductInput};
use crate::response::{self, DeleteResult};
use crate::service::ProductValidator;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest("invalid product id".into()))
}

fn parse_body(payload: Result<Json<ProductInput>, JsonRejection>) -> Result<ProductInput, AppError> {
    let Json(input) = payload?;
    ProductValidator::validate(&input)?;
    Ok(input)
}

#[utoipa::path(
    get,
    path = "/product/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, body = Product),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let id = parse_id(&id_str)?;
    let product = state.products.get_by_id(id).await?;
    Ok(response::ok(product))
}

#[utoipa::path(
    post,
    path = "/product",
    request_body = ProductInput,
    responses(
        (status = 201, body = Product),
        (status = 400, body = ErrorBody),
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let input = parse_body(payload)?;
    let product = state.products.create(&input).await?;
    Ok(response::created(product))
}

#[utoipa::path(
    put,
    path = "/product/{id}",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductInput,
    responses(
        (status = 200, body = Product),
        (status = 400, body = ErrorBody),
        (status = 404, body = ErrorBody),
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<ProductInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let id = parse_id(&id_str)?;
    let input = parse_body(payload)?;
    let product = state.products.update(id, &input).await?;
    Ok(response::ok(product))
}

/// Succeeds whether or not the row existed.
#[utoipa::path(
    delete,
    path = "/product/{id}",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, body = DeleteResult),
        (status = 400, body = ErrorBody),
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<DeleteResult>), AppError> {
    let id = parse_id(&id_str)?;
    state.products.delete(id).await?;
    Ok(response::deleted())
}
