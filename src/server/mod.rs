//! HTTP surface of the memory wall.
//!
//! ## Routes
//!
//! | Method | Path                   | Handler                   |
//! |--------|------------------------|---------------------------|
//! | GET    | `/api/memories`        | [`routes::list_memories`] |
//! | POST   | `/api/upload`          | [`routes::upload`]        |
//! | POST   | `/api/message`         | [`routes::create_message`]|
//! | DELETE | `/api/memories/{id}`   | [`routes::delete_memory`] |
//! | GET    | `/api/stats`           | [`routes::stats`]         |
//!
//! Uploaded files are served read-only under `/uploads`, and every other path falls
//! through to the front-end directory.

mod error;
pub mod routes;
mod upload;

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    config::{UPLOADS_ROUTE, UploadSettings, WallConfig},
    error::Result,
    wall::MemoryWall,
};

pub use upload::receive_upload;

pub struct AppState {
    pub wall: MemoryWall,
    pub limits: UploadSettings,
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn from_config(config: &WallConfig) -> Self {
        Self {
            wall: MemoryWall::from_config(config),
            limits: config.uploads.clone(),
            public_dir: config.server.public_dir.clone(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.limits.max_request_bytes();
    let uploads = ServeDir::new(state.wall.uploads().dir());
    let public = ServeDir::new(&state.public_dir);

    Router::new()
        .route("/api/memories", get(routes::list_memories))
        .route("/api/memories/{id}", delete(routes::delete_memory))
        .route(
            "/api/upload",
            post(routes::upload).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/api/message", post(routes::create_message))
        .route("/api/stats", get(routes::stats))
        .nest_service(UPLOADS_ROUTE, uploads)
        .fallback_service(public)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Prepares the storage layout and serves until Ctrl-C.
pub async fn run_server(config: &WallConfig) -> Result<()> {
    let state = AppState::from_config(config);
    state.wall.init()?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        data_file = %config.storage.data_file.display(),
        upload_dir = %config.storage.upload_dir.display(),
        "Memory wall listening"
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
