//! Product persistence behind a trait so the router takes an injected handle.

mod postgres;
pub use postgres::PgProductRepository;

use crate::error::AppError;
use crate::model::{Product, ProductInput};
use async_trait::async_trait;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// `AppError::NotFound` when no row has `id`.
    async fn get_by_id(&self, id: i64) -> Result<Product, AppError>;

    /// Insert and return the stored row with its assigned id.
    async fn create(&self, input: &ProductInput) -> Result<Product, AppError>;

    /// Replace every mutable field of row `id`. `AppError::NotFound` when absent.
    async fn update(&self, id: i64, input: &ProductInput) -> Result<Product, AppError>;

    /// Remove row `id`. A missing row is not an error.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), AppError>;
}
