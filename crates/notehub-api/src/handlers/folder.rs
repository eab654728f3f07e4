//! Folder CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use notehub_core::error::AppError;
use notehub_entity::folder::Folder;
use notehub_service::folder::service::CreateFolderRequest as SvcCreateFolder;

use crate::dto::request::{CreateFolderRequest, UpdateFolderRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::OwnerContext;
use crate::state::AppState;

/// GET /api/folders
pub async fn list_folders(
    State(state): State<AppState>,
    owner: OwnerContext,
) -> Result<Json<ApiResponse<Vec<Folder>>>, ApiError> {
    let folders = state.folder_service.list_folders(&owner).await?;
    Ok(Json(ApiResponse::ok(folders)))
}

/// GET /api/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    owner: OwnerContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Folder>>, ApiError> {
    let folder = state.folder_service.get_folder(&owner, id).await?;
    Ok(Json(ApiResponse::ok(folder)))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    owner: OwnerContext,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<ApiResponse<Folder>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid folder request: {e}")))?;

    let folder = state
        .folder_service
        .create_folder(
            &owner,
            SvcCreateFolder {
                parent_id: req.parent_id,
                name: req.name,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(folder)))
}

/// PUT /api/folders/{id}
///
/// Accepts a rename (`name`), a move (`parent_id`, where an explicit
/// `null` means the root), or both. Omitting `parent_id` keeps the
/// current parent.
pub async fn update_folder(
    State(state): State<AppState>,
    owner: OwnerContext,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFolderRequest>,
) -> Result<Json<ApiResponse<Folder>>, ApiError> {
    let mut updated = None;

    if let Some(name) = req.name.as_deref() {
        updated = Some(state.folder_service.rename_folder(&owner, id, name).await?);
    }
    if let Some(new_parent_id) = req.parent_id {
        updated = Some(
            state
                .folder_service
                .move_folder(&owner, id, new_parent_id)
                .await?,
        );
    }

    let folder = updated.ok_or_else(|| {
        AppError::validation("Nothing to update: provide name and/or parent_id")
    })?;
    Ok(Json(ApiResponse::ok(folder)))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    owner: OwnerContext,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.folder_service.delete_folder(&owner, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Folder deleted".to_string(),
    })))
}
