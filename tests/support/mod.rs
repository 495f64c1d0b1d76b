//! Shared helpers for integration tests: in-memory repository and request plumbing.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use product_api::{AppError, AppState, Product, ProductInput, ProductRepository};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Mirrors the table semantics: ids start at 1, deleted ids are not reused
/// until `clear`, absent quantity stores 0, and price behaves like
/// `NUMERIC(12, 2)` (rounded to 2 places, overflow is a store error).
#[derive(Default)]
pub struct MemoryProductRepository {
    rows: Mutex<(i64, BTreeMap<i64, Product>)>,
    unavailable: AtomicBool,
}

impl MemoryProductRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn clear(&self) {
        let mut guard = self.rows.lock().unwrap();
        *guard = (0, BTreeMap::new());
    }

    /// Make every call fail as if the database were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().1.len()
    }

    fn column_price(price: Decimal) -> Result<Decimal, AppError> {
        if price.abs() >= Decimal::from(10_000_000_000_i64) {
            return Err(AppError::Db(sqlx::Error::Protocol("numeric field overflow".into())));
        }
        Ok(price.round_dp(2))
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn get_by_id(&self, id: i64) -> Result<Product, AppError> {
        self.check_available()?;
        let guard = self.rows.lock().unwrap();
        guard.1.get(&id).cloned().ok_or(AppError::NotFound("product"))
    }

    async fn create(&self, input: &ProductInput) -> Result<Product, AppError> {
        self.check_available()?;
        let price = Self::column_price(input.price)?;
        let mut guard = self.rows.lock().unwrap();
        guard.0 += 1;
        let product = Product {
            id: guard.0,
            name: input.name.clone(),
            quantity: input.quantity.unwrap_or(0),
            price,
        };
        guard.1.insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, input: &ProductInput) -> Result<Product, AppError> {
        self.check_available()?;
        let price = Self::column_price(input.price)?;
        let mut guard = self.rows.lock().unwrap();
        let row = guard.1.get_mut(&id).ok_or(AppError::NotFound("product"))?;
        row.name = input.name.clone();
        row.quantity = input.quantity.unwrap_or(0);
        row.price = price;
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.check_available()?;
        self.rows.lock().unwrap().1.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_available()
    }
}

pub fn router_with(repo: Arc<MemoryProductRepository>) -> Router {
    product_api::build_router(AppState::new(repo))
}

/// Send one request and return status plus raw body bytes.
pub async fn send_raw(router: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes)
}

/// Send one request and return status plus parsed JSON body (`Value::Null` when empty).
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(b) => {
            builder = builder.header("content-type", "application/json");
            Body::from(b.to_string())
        }
        None => Body::empty(),
    };
    let (status, bytes) = send_raw(router, builder.body(body).unwrap()).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Insert directly through the repository, bypassing HTTP.
pub async fn add_product(repo: &MemoryProductRepository, name: &str, quantity: i32, price: i64) -> Product {
    repo.create(&ProductInput::new(name, Some(quantity), Decimal::from(price)))
        .await
        .unwrap()
}
