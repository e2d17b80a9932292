//! HTTP router and server lifecycle.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::service::TaskService;
use crate::storage::TaskStore;

use super::todos;

/// Shared application state.
pub struct AppState {
    pub service: TaskService,
}

/// Build the application router around one service instance.
pub fn app(service: TaskService) -> Router {
    let state = Arc::new(AppState { service });

    Router::new()
        .route("/api", get(api_root))
        .nest("/api/todos", todos::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let store = TaskStore::new(config.data_file.clone());
    store.ensure_file()?;
    tracing::info!("Task file: {}", store.path().display());

    let app = app(TaskService::new(store));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("API server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// GET /api - verify that the API is up.
async fn api_root() -> &'static str {
    "TODO List API is running."
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
