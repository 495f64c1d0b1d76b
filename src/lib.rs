//! product-api: CRUD REST service over a PostgreSQL `products` table.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use app::{build_router, run};
pub use config::Config;
pub use error::{AppError, ConfigError};
pub use model::{Product, ProductInput};
pub use repository::{PgProductRepository, ProductRepository};
pub use state::AppState;
pub use store::{clear_products, ensure_database_exists, ensure_products_table};
