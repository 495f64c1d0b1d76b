//! Statement text for the products table. Values are always bound as parameters.

mod builder;
pub use builder::*;
