//! Router assembly and server lifecycle.

use crate::config::Config;
use crate::repository::PgProductRepository;
use crate::routes::{common_routes_with_ready, not_found, product_routes};
use crate::state::AppState;
use crate::store;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Maximum accepted request body.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application router over an injected repository handle.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(product_routes(state))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES)),
        )
}

/// Bootstrap the database, serve until Ctrl-C or SIGTERM, then close the pool.
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    store::ensure_database_exists(&config.database_url).await?;
    let pool = store::connect(&config).await?;
    store::ensure_products_table(&pool).await?;

    let state = AppState::new(Arc::new(PgProductRepository::new(pool.clone())));
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("database pool closed");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
