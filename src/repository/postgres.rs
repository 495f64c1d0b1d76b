//! PostgreSQL implementation of [`ProductRepository`].

use super::ProductRepository;
use crate::error::AppError;
use crate::model::{Product, ProductInput};
use crate::sql;
use crate::store;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        PgProductRepository { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn get_by_id(&self, id: i64) -> Result<Product, AppError> {
        let q = sql::select_by_id();
        tracing::debug!(sql = %q, id, "query");
        sqlx::query_as::<_, Product>(&q)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound("product"))
    }

    async fn create(&self, input: &ProductInput) -> Result<Product, AppError> {
        let q = sql::insert(input.quantity.is_some());
        tracing::debug!(sql = %q, params = ?input, "query");
        let mut query = sqlx::query_as::<_, Product>(&q)
            .bind(&input.name)
            .bind(input.price);
        if let Some(quantity) = input.quantity {
            query = query.bind(quantity);
        }
        let product = query.fetch_one(&self.pool).await?;
        tracing::info!(id = product.id, "product created");
        Ok(product)
    }

    async fn update(&self, id: i64, input: &ProductInput) -> Result<Product, AppError> {
        let q = sql::update(input.quantity.is_some());
        tracing::debug!(sql = %q, id, params = ?input, "query");
        let mut query = sqlx::query_as::<_, Product>(&q)
            .bind(id)
            .bind(&input.name)
            .bind(input.price);
        if let Some(quantity) = input.quantity {
            query = query.bind(quantity);
        }
        query
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound("product"))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let q = sql::delete();
        tracing::debug!(sql = %q, id, "query");
        let result = sqlx::query(&q).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            tracing::debug!(id, "delete matched no row");
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        store::ping(&self.pool).await
    }
}
