//! Product entity and the request body used to create or replace one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the `products` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    #[schema(value_type = f64)]
    pub price: Decimal,
}

/// Body of `POST /product` and `PUT /product/{id}`.
///
/// `quantity` is optional; when absent the column default is stored. JSON
/// floats are rejected for `quantity` rather than truncated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductInput {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<i32>,
    #[schema(value_type = f64)]
    pub price: Decimal,
}

impl ProductInput {
    pub fn new(name: impl Into<String>, quantity: Option<i32>, price: Decimal) -> Self {
        ProductInput {
            name: name.into(),
            quantity,
            price,
        }
    }
}
