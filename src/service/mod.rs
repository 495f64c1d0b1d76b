//! Request validation applied before any repository call.

mod validation;
pub use validation::{ProductValidator, NAME_MAX_LENGTH, PRICE_LIMIT, PRICE_SCALE};
