//! Folder CRUD operations with namespace invariant enforcement.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use notehub_core::error::AppError;
use notehub_core::result::AppResult;
use notehub_database::store::NamespaceStore;
use notehub_entity::folder::{CreateFolder, Folder};

use crate::context::RequestContext;
use crate::namespace::{CascadeUpdater, IntegrityGuard, OwnerLocks, PathResolver};

/// Request to create a new folder.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateFolderRequest {
    /// Parent folder ID (None for root-level).
    pub parent_id: Option<Uuid>,
    /// Folder name.
    pub name: String,
}

/// Manages folder CRUD operations.
///
/// Every mutation runs guard → resolve → write (→ cascade when the path
/// changed) under the owner's mutation lock, so concurrent cascades on
/// the same tenant are serialized.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Namespace store.
    store: Arc<dyn NamespaceStore>,
    /// Path resolver.
    resolver: PathResolver,
    /// Mutation guard.
    guard: IntegrityGuard,
    /// Cascade updater.
    cascade: CascadeUpdater,
    /// Per-owner mutation locks.
    locks: Arc<OwnerLocks>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(store: Arc<dyn NamespaceStore>, locks: Arc<OwnerLocks>) -> Self {
        Self {
            resolver: PathResolver::new(Arc::clone(&store)),
            guard: IntegrityGuard::new(Arc::clone(&store)),
            cascade: CascadeUpdater::new(Arc::clone(&store)),
            store,
            locks,
        }
    }

    /// Lists all folders for the owner, ordered by path.
    pub async fn list_folders(&self, ctx: &RequestContext) -> AppResult<Vec<Folder>> {
        self.store.list_folders(ctx.owner_id).await
    }

    /// Gets a folder by ID.
    pub async fn get_folder(&self, ctx: &RequestContext, folder_id: Uuid) -> AppResult<Folder> {
        self.guard.ensure_folder_exists(ctx.owner_id, folder_id).await
    }

    /// Creates a new folder with a computed materialized path.
    pub async fn create_folder(
        &self,
        ctx: &RequestContext,
        req: CreateFolderRequest,
    ) -> AppResult<Folder> {
        IntegrityGuard::validate_name(&req.name)?;

        let _lock = self.locks.acquire(ctx.owner_id).await;

        let path = self
            .resolver
            .compute_path(ctx.owner_id, req.parent_id, &req.name)
            .await?;

        let folder = self
            .store
            .insert_folder(&CreateFolder {
                owner_id: ctx.owner_id,
                parent_id: req.parent_id,
                name: req.name,
                path,
            })
            .await?;

        info!(
            owner_id = %ctx.owner_id,
            folder_id = %folder.id,
            path = %folder.path,
            "Folder created"
        );

        Ok(folder)
    }

    /// Renames a folder, keeping its parent.
    ///
    /// Renaming a folder to its current name is a no-op: no row is written
    /// and no cascade runs.
    pub async fn rename_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
        new_name: &str,
    ) -> AppResult<Folder> {
        IntegrityGuard::validate_name(new_name)?;

        let _lock = self.locks.acquire(ctx.owner_id).await;

        let folder = self.guard.ensure_folder_exists(ctx.owner_id, folder_id).await?;
        if folder.name == new_name {
            return Ok(folder);
        }

        let new_path = self
            .resolver
            .compute_path(ctx.owner_id, folder.parent_id, new_name)
            .await?;

        let updated = self
            .store
            .update_folder_entry(ctx.owner_id, folder_id, new_name, folder.parent_id, &new_path)
            .await?;

        let rewritten = self
            .cascade
            .propagate(ctx.owner_id, &folder.path, &updated.path)
            .await?;

        info!(
            owner_id = %ctx.owner_id,
            folder_id = %folder_id,
            new_name = %new_name,
            rewritten,
            "Folder renamed"
        );

        Ok(updated)
    }

    /// Moves a folder under a new parent, or to the root with `None`.
    ///
    /// `new_parent_id` is the *explicit* destination: `None` means the
    /// root, not "leave unchanged". Callers that want to leave the parent
    /// untouched simply do not call this operation.
    pub async fn move_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
        new_parent_id: Option<Uuid>,
    ) -> AppResult<Folder> {
        let _lock = self.locks.acquire(ctx.owner_id).await;

        let folder = self.guard.ensure_folder_exists(ctx.owner_id, folder_id).await?;
        if folder.parent_id == new_parent_id {
            return Ok(folder);
        }

        if let Some(parent_id) = new_parent_id {
            self.guard
                .ensure_no_cycle(ctx.owner_id, folder_id, parent_id)
                .await?;
        }

        let new_path = self
            .resolver
            .compute_path(ctx.owner_id, new_parent_id, &folder.name)
            .await?;

        let updated = self
            .store
            .update_folder_entry(ctx.owner_id, folder_id, &folder.name, new_parent_id, &new_path)
            .await?;

        let rewritten = self
            .cascade
            .propagate(ctx.owner_id, &folder.path, &updated.path)
            .await?;

        info!(
            owner_id = %ctx.owner_id,
            folder_id = %folder_id,
            new_parent = ?new_parent_id,
            rewritten,
            "Folder moved"
        );

        Ok(updated)
    }

    /// Deletes a folder. Only empty folders may be deleted.
    pub async fn delete_folder(&self, ctx: &RequestContext, folder_id: Uuid) -> AppResult<()> {
        let _lock = self.locks.acquire(ctx.owner_id).await;

        let folder = self.guard.ensure_folder_exists(ctx.owner_id, folder_id).await?;
        self.guard.ensure_empty(ctx.owner_id, folder_id).await?;

        if !self.store.delete_folder(ctx.owner_id, folder_id).await? {
            return Err(AppError::not_found(format!("Folder {folder_id} not found")));
        }

        info!(
            owner_id = %ctx.owner_id,
            folder_id = %folder_id,
            path = %folder.path,
            "Folder deleted"
        );

        Ok(())
    }
}
