//! HTTP server for Smartnotes
//!
//! Server-rendered HTML pages for browsing and editing notes, plus JSON
//! endpoints for LLM enrichment.

pub mod render;
pub mod routes;

use crate::ai::EnrichmentBackend;
use crate::db::Database;
use crate::error::Result;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Note store
    pub db: Arc<Database>,
    /// Enrichment gateway
    pub gateway: Arc<dyn EnrichmentBackend>,
}

/// Start the HTTP server (blocks until shutdown)
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = create_router(state);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins, as the original app did
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Listing and search
        .route("/", get(routes::index).post(routes::search))
        .route("/nlq_search", post(routes::nlq_search))
        // Note CRUD
        .route("/add_note", post(routes::add_note))
        .route(
            "/edit_note/:id",
            get(routes::edit_note_form).post(routes::edit_note),
        )
        .route("/delete_note/:id", get(routes::delete_note))
        .route("/view_note/:id", get(routes::view_note))
        // Enrichment
        .route("/summarize", post(routes::summarize))
        .route("/categorize", post(routes::categorize))
        .route("/sentiment", post(routes::sentiment))
        // Health check
        .route("/health", get(routes::health))
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
