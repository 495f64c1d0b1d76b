//! Field rules for product bodies on create and update.

use crate::error::AppError;
use crate::model::ProductInput;
use rust_decimal::Decimal;

/// Matches the `VARCHAR(255)` name column.
pub const NAME_MAX_LENGTH: usize = 255;

/// Scale of the `NUMERIC(12, 2)` price column.
pub const PRICE_SCALE: u32 = 2;

/// Exclusive upper bound of the price column: 10 integer digits.
pub const PRICE_LIMIT: i64 = 10_000_000_000;

pub struct ProductValidator;

impl ProductValidator {
    /// Name must be non-blank and fit the column. Quantity must not be negative. Price must be
    /// non-negative, below [`PRICE_LIMIT`] and carry at most [`PRICE_SCALE`] decimal places, so
    /// the stored value is exactly the one sent.
    pub fn validate(input: &ProductInput) -> Result<(), AppError> {
        if input.name.trim().is_empty() {
            return Err(AppError::Validation("name is required".into()));
        }
        if input.name.chars().count() > NAME_MAX_LENGTH {
            return Err(AppError::Validation(format!(
                "name must be at most {} characters",
                NAME_MAX_LENGTH
            )));
        }
        if let Some(quantity) = input.quantity {
            if quantity < 0 {
                return Err(AppError::Validation("quantity must be at least 0".into()));
            }
        }
        if input.price < Decimal::ZERO {
            return Err(AppError::Validation("price must be at least 0".into()));
        }
        if input.price >= Decimal::from(PRICE_LIMIT) {
            return Err(AppError::Validation(format!("price must be less than {}", PRICE_LIMIT)));
        }
        if input.price.normalize().scale() > PRICE_SCALE {
            return Err(AppError::Validation(format!(
                "price must have at most {} decimal places",
                PRICE_SCALE
            )));
        }
        Ok(())
    }
}
