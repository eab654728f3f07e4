//! File CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use notehub_core::error::AppError;
use notehub_database::store::FileFilter;
use notehub_entity::file::File;
use notehub_service::file::service::CreateFileRequest as SvcCreateFile;

use crate::dto::request::{CreateFileRequest, FileListQuery, UpdateFileRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::OwnerContext;
use crate::state::AppState;

/// GET /api/files?folder_id=&type=
pub async fn list_files(
    State(state): State<AppState>,
    owner: OwnerContext,
    Query(query): Query<FileListQuery>,
) -> Result<Json<ApiResponse<Vec<File>>>, ApiError> {
    let files = state
        .file_service
        .list_files(
            &owner,
            &FileFilter {
                folder_id: query.folder_id,
                kind: query.kind,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(files)))
}

/// GET /api/files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    owner: OwnerContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<File>>, ApiError> {
    let file = state.file_service.get_file(&owner, id).await?;
    Ok(Json(ApiResponse::ok(file)))
}

/// POST /api/files
pub async fn create_file(
    State(state): State<AppState>,
    owner: OwnerContext,
    Json(req): Json<CreateFileRequest>,
) -> Result<Json<ApiResponse<File>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid file request: {e}")))?;

    let file = state
        .file_service
        .create_file(
            &owner,
            SvcCreateFile {
                folder_id: req.folder_id,
                name: req.name,
                kind: req.kind,
                content: req.content,
                storage_path: req.storage_path,
                size: req.size,
                mime_type: req.mime_type,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(file)))
}

/// PUT /api/files/{id}
///
/// Accepts a rename (`name`), a move (`folder_id`, explicit `null` =
/// root), or both. Content updates are handled by the content subsystem,
/// not this API.
pub async fn update_file(
    State(state): State<AppState>,
    owner: OwnerContext,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFileRequest>,
) -> Result<Json<ApiResponse<File>>, ApiError> {
    let mut updated = None;

    if let Some(name) = req.name.as_deref() {
        updated = Some(state.file_service.rename_file(&owner, id, name).await?);
    }
    if let Some(new_folder_id) = req.folder_id {
        updated = Some(state.file_service.move_file(&owner, id, new_folder_id).await?);
    }

    let file = updated.ok_or_else(|| {
        AppError::validation("Nothing to update: provide name and/or folder_id")
    })?;
    Ok(Json(ApiResponse::ok(file)))
}

/// DELETE /api/files/{id}
pub async fn delete_file(
    State(state): State<AppState>,
    owner: OwnerContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.file_service.delete_file(&owner, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "File deleted".to_string(),
    })))
}
