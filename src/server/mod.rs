//! HTTP API.
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/search/?query=..&filter_type=songs&limit=5` | JSON array of search results |
//! | GET | `/` | service description |
//!
//! The search service, and through it the catalog provider, is built once at
//! startup and shared by every request.

mod error;
mod handlers;

use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::search::SearchService;

/// Shared request state
#[derive(Clone)]
pub struct AppState {
    pub service: SearchService,
}

impl AppState {
    pub fn new(service: SearchService) -> Self {
        Self { service }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/search/", get(handlers::search))
        .route("/search", get(handlers::search))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API until Ctrl-C or SIGTERM.
pub async fn serve(addr: SocketAddr, state: AppState) -> crate::error::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| crate::error::Error::Bind(addr, e))?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
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

    tracing::info!("Shutdown signal received");
}
