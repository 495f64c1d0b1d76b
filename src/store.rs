//! PostgreSQL connection pool and products table bootstrap.

use crate::config::{Config, PoolConfig};
use crate::error::{AppError, ConfigError};
use crate::sql::{quoted, PRODUCTS_TABLE};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, Connection, PgPool};
use std::str::FromStr;

/// Open the shared pool. Connections are established eagerly so a bad URL fails at startup.
pub async fn connect(config: &Config) -> Result<PgPool, AppError> {
    connect_with(&config.database_url, &config.db).await
}

pub async fn connect_with(database_url: &str, pool: &PoolConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(pool.max_connections)
        .acquire_timeout(pool.acquire_timeout)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Create the products table if it does not exist.
pub async fn ensure_products_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            quantity INTEGER NOT NULL DEFAULT 0,
            price NUMERIC(12, 2) NOT NULL DEFAULT 0
        )
        "#,
        quoted(PRODUCTS_TABLE)
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Remove every product and restart id assignment at 1.
pub async fn clear_products(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(&format!("TRUNCATE {} RESTART IDENTITY", quoted(PRODUCTS_TABLE)))
        .execute(pool)
        .await?;
    tracing::debug!("products table cleared");
    Ok(())
}

/// One round trip to the database.
pub async fn ping(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("SELECT 1").fetch_optional(pool).await?;
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Call before creating the main pool.
/// Connects to the target first; only when the server reports it missing does this fall back to the
/// default `postgres` database to run CREATE DATABASE.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let opts = parse_connect_options(database_url)?;
    match opts.connect().await {
        Ok(conn) => {
            let _ = conn.close().await;
            return Ok(());
        }
        Err(e) if is_missing_database(&e) => {}
        Err(e) => return Err(e.into()),
    }

    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let mut conn: sqlx::PgConnection = parse_connect_options(&admin_url)?.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quoted(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_connect_options(url: &str) -> Result<PgConnectOptions, ConfigError> {
    PgConnectOptions::from_str(url).map_err(|e| ConfigError::Invalid {
        key: "DATABASE_URL",
        message: e.to_string(),
    })
}

/// SQLSTATE 3D000 (invalid_catalog_name): the target database does not exist.
fn is_missing_database(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => db.code().as_deref() == Some("3D000"),
        _ => false,
    }
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url
        .get(scheme_end..)
        .and_then(|rest| rest.find('/'))
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| ConfigError::Invalid {
            key: "DATABASE_URL",
            message: "no database path".into(),
        })?;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let mut parts = path_and_query.splitn(2, '?');
    let db_name = parts.next().unwrap_or("").trim();
    let query = parts.next().map(|q| format!("?{}", q)).unwrap_or_default();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres{}", base, query);
    Ok((admin_url, db_name.to_string()))
}
