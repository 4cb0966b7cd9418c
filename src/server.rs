// src/server.rs
//
// HTTP server for the cake catalog.
// - Read-only GET routes under /api, plus the older /cakes and /categories.
// - Any origin may call it (the storefront is served elsewhere).
// - Shuts down cleanly on Ctrl+C or SIGTERM.

use anyhow::Result;
use axum::{http::Method, routing::get, Router};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::catalog::Catalog;
use crate::routes::{self, AppState};
use crate::store::CatalogStore;

pub fn router(store: Arc<dyn CatalogStore>) -> Router {
    let state = AppState {
        catalog: Catalog::new(store),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(routes::root))
        .route("/api/categories", get(routes::categories))
        .route("/categories", get(routes::categories))
        .route("/api/filter-options", get(routes::filter_options))
        .route("/api/search-suggestions", get(routes::search_suggestions))
        .route("/api/search", get(routes::search))
        .route("/api/cakes/filter", get(routes::filtered_cakes))
        .route("/api/cakes", get(routes::all_cakes))
        .route("/cakes", get(routes::all_cakes))
        .route("/api/cakes/:category", get(routes::cakes_by_category))
        .route("/api/cake/:id", get(routes::cake))
        .route("/api/related-cakes/:id", get(routes::related_cakes))
        .route("/api/test-db", get(routes::test_db))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(store: Arc<dyn CatalogStore>, bind: SocketAddr) -> Result<()> {
    let app = router(store);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Server running on {bind}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
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
}
