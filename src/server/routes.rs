use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Multipart, Path, State, multipart::MultipartRejection, rejection::JsonRejection,
    },
};
use serde::{Deserialize, Serialize};

use super::{AppState, upload::receive_upload};
use crate::{
    error::{Result, WallError},
    model::{MemoryRecord, WallStats},
    wall::MemoryWall,
};

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub author: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub memory: MemoryRecord,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Runs a wall operation on the blocking pool; the wall does plain file I/O.
async fn with_wall<T, F>(state: &AppState, op: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&MemoryWall) -> Result<T> + Send + 'static,
{
    let wall = state.wall.clone();
    tokio::task::spawn_blocking(move || op(&wall))
        .await
        .map_err(|e| WallError::Storage(format!("Wall task failed: {e}")))?
}

/// `GET /api/memories`
pub async fn list_memories(State(state): State<Arc<AppState>>) -> Result<Json<Vec<MemoryRecord>>> {
    Ok(Json(with_wall(&state, |wall| wall.list()).await?))
}

/// `POST /api/upload`
pub async fn upload(
    State(state): State<Arc<AppState>>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<CreatedResponse>> {
    let multipart = multipart.map_err(|e| WallError::Validation(e.body_text()))?;
    let (form, files) = receive_upload(state.wall.uploads(), &state.limits, multipart).await?;

    // Stored files stay on disk if this fails.
    let memory = with_wall(&state, move |wall| wall.record_upload(form, files)).await?;
    Ok(Json(CreatedResponse {
        success: true,
        memory,
    }))
}

/// `POST /api/message`
pub async fn create_message(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<MessageRequest>, JsonRejection>,
) -> Result<Json<CreatedResponse>> {
    let Json(request) = payload.map_err(|e| WallError::Validation(e.body_text()))?;
    let memory = with_wall(&state, move |wall| {
        wall.create_message(request.author.as_deref(), request.message.as_deref())
    })
    .await?;
    Ok(Json(CreatedResponse {
        success: true,
        memory,
    }))
}

/// `DELETE /api/memories/{id}`, successful whether or not the id exists.
pub async fn delete_memory(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>> {
    with_wall(&state, move |wall| wall.delete(&id)).await?;
    Ok(Json(SuccessResponse { success: true }))
}

/// `GET /api/stats`
pub async fn stats(State(state): State<Arc<AppState>>) -> Result<Json<WallStats>> {
    Ok(Json(with_wall(&state, |wall| wall.stats()).await?))
}
