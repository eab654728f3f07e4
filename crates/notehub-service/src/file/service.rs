//! File CRUD operations.
//!
//! Files carry no materialized path of their own — placement is the
//! `folder_id` reference — so file mutations never cascade.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use notehub_core::error::AppError;
use notehub_core::result::AppResult;
use notehub_database::store::{FileFilter, NamespaceStore};
use notehub_entity::file::{CreateFile, File, FileKind};

use crate::context::RequestContext;
use crate::namespace::IntegrityGuard;

/// Request to create a new file record.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateFileRequest {
    /// Folder to place the file in (None = root-level).
    pub folder_id: Option<Uuid>,
    /// File name.
    pub name: String,
    /// Content kind.
    pub kind: FileKind,
    /// Inline content (Markdown notes).
    pub content: Option<String>,
    /// Opaque blob storage handle.
    pub storage_path: Option<String>,
    /// Size in bytes.
    pub size: i64,
    /// MIME type.
    pub mime_type: Option<String>,
}

/// Manages file CRUD operations.
#[derive(Debug, Clone)]
pub struct FileService {
    /// Namespace store.
    store: Arc<dyn NamespaceStore>,
    /// Mutation guard (target folder checks).
    guard: IntegrityGuard,
}

impl FileService {
    /// Creates a new file service.
    pub fn new(store: Arc<dyn NamespaceStore>) -> Self {
        Self {
            guard: IntegrityGuard::new(Arc::clone(&store)),
            store,
        }
    }

    /// Lists files for the owner, optionally filtered by folder and kind.
    pub async fn list_files(
        &self,
        ctx: &RequestContext,
        filter: &FileFilter,
    ) -> AppResult<Vec<File>> {
        self.store.list_files(ctx.owner_id, filter).await
    }

    /// Gets a file by ID.
    pub async fn get_file(&self, ctx: &RequestContext, file_id: Uuid) -> AppResult<File> {
        self.store
            .find_file(ctx.owner_id, file_id)
            .await?
            .ok_or_else(|| AppError::not_found("File not found"))
    }

    /// Creates a new file record under an optional folder.
    pub async fn create_file(
        &self,
        ctx: &RequestContext,
        req: CreateFileRequest,
    ) -> AppResult<File> {
        IntegrityGuard::validate_name(&req.name)?;

        if let Some(folder_id) = req.folder_id {
            self.guard.ensure_folder_exists(ctx.owner_id, folder_id).await?;
        }

        let file = self
            .store
            .insert_file(&CreateFile {
                owner_id: ctx.owner_id,
                folder_id: req.folder_id,
                name: req.name,
                kind: req.kind,
                content: req.content,
                storage_path: req.storage_path,
                size: req.size,
                mime_type: req.mime_type,
            })
            .await?;

        info!(
            owner_id = %ctx.owner_id,
            file_id = %file.id,
            name = %file.name,
            "File created"
        );

        Ok(file)
    }

    /// Renames a file, keeping its folder.
    pub async fn rename_file(
        &self,
        ctx: &RequestContext,
        file_id: Uuid,
        new_name: &str,
    ) -> AppResult<File> {
        IntegrityGuard::validate_name(new_name)?;

        let file = self.get_file(ctx, file_id).await?;
        if file.name == new_name {
            return Ok(file);
        }

        let updated = self
            .store
            .update_file_entry(ctx.owner_id, file_id, new_name, file.folder_id)
            .await?;

        info!(
            owner_id = %ctx.owner_id,
            file_id = %file_id,
            new_name = %new_name,
            "File renamed"
        );

        Ok(updated)
    }

    /// Moves a file into another folder, or to the root with `None`.
    pub async fn move_file(
        &self,
        ctx: &RequestContext,
        file_id: Uuid,
        new_folder_id: Option<Uuid>,
    ) -> AppResult<File> {
        let file = self.get_file(ctx, file_id).await?;

        if let Some(folder_id) = new_folder_id {
            self.guard.ensure_folder_exists(ctx.owner_id, folder_id).await?;
        }

        if file.folder_id == new_folder_id {
            return Ok(file);
        }

        let updated = self
            .store
            .update_file_entry(ctx.owner_id, file_id, &file.name, new_folder_id)
            .await?;

        info!(
            owner_id = %ctx.owner_id,
            file_id = %file_id,
            new_folder = ?new_folder_id,
            "File moved"
        );

        Ok(updated)
    }

    /// Deletes a file. No emptiness guard applies.
    pub async fn delete_file(&self, ctx: &RequestContext, file_id: Uuid) -> AppResult<()> {
        if !self.store.delete_file(ctx.owner_id, file_id).await? {
            return Err(AppError::not_found(format!("File {file_id} not found")));
        }

        info!(owner_id = %ctx.owner_id, file_id = %file_id, "File deleted");
        Ok(())
    }
}
