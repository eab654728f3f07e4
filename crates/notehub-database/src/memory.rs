//! In-memory implementation of the namespace store.
//!
//! Used by the test suites and for running the server without PostgreSQL.
//! Semantics mirror the PostgreSQL backend, including the unique
//! `(owner_id, path)` constraint and the strict prefix rewrite.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use notehub_core::error::AppError;
use notehub_core::result::AppResult;
use notehub_entity::file::{CreateFile, File};
use notehub_entity::folder::{CreateFolder, Folder};

use crate::store::{rewrite_prefix, FileFilter, NamespaceStore};

#[derive(Debug, Default)]
struct MemoryState {
    folders: HashMap<Uuid, Folder>,
    files: HashMap<Uuid, File>,
}

/// Non-durable store holding all rows in process memory.
#[derive(Debug, Default)]
pub struct MemoryNamespaceStore {
    inner: Mutex<MemoryState>,
}

impl MemoryNamespaceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MemoryState {
    fn path_taken(&self, owner_id: Uuid, path: &str, exclude: Option<Uuid>) -> bool {
        self.folders.values().any(|f| {
            f.owner_id == owner_id && f.path == path && Some(f.id) != exclude
        })
    }
}

#[async_trait]
impl NamespaceStore for MemoryNamespaceStore {
    async fn find_folder(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<Option<Folder>> {
        let state = self.inner.lock().await;
        Ok(state
            .folders
            .get(&folder_id)
            .filter(|f| f.owner_id == owner_id)
            .cloned())
    }

    async fn list_folders(&self, owner_id: Uuid) -> AppResult<Vec<Folder>> {
        let state = self.inner.lock().await;
        let mut folders: Vec<Folder> = state
            .folders
            .values()
            .filter(|f| f.owner_id == owner_id)
            .cloned()
            .collect();
        folders.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(folders)
    }

    async fn insert_folder(&self, data: &CreateFolder) -> AppResult<Folder> {
        let mut state = self.inner.lock().await;
        if state.path_taken(data.owner_id, &data.path, None) {
            return Err(AppError::conflict(format!(
                "Folder path '{}' already exists",
                data.path
            )));
        }
        let now = Utc::now();
        let folder = Folder {
            id: Uuid::new_v4(),
            owner_id: data.owner_id,
            parent_id: data.parent_id,
            name: data.name.clone(),
            path: data.path.clone(),
            created_at: now,
            updated_at: now,
        };
        state.folders.insert(folder.id, folder.clone());
        Ok(folder)
    }

    async fn update_folder_entry(
        &self,
        owner_id: Uuid,
        folder_id: Uuid,
        name: &str,
        parent_id: Option<Uuid>,
        path: &str,
    ) -> AppResult<Folder> {
        let mut state = self.inner.lock().await;
        if !state
            .folders
            .get(&folder_id)
            .is_some_and(|f| f.owner_id == owner_id)
        {
            return Err(AppError::not_found(format!("Folder {folder_id} not found")));
        }
        if state.path_taken(owner_id, path, Some(folder_id)) {
            return Err(AppError::conflict(format!(
                "Folder path '{path}' already exists"
            )));
        }
        let folder = state
            .folders
            .get_mut(&folder_id)
            .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))?;
        folder.name = name.to_string();
        folder.parent_id = parent_id;
        folder.path = path.to_string();
        folder.updated_at = Utc::now();
        Ok(folder.clone())
    }

    async fn rewrite_descendant_paths(
        &self,
        owner_id: Uuid,
        old_prefix: &str,
        new_prefix: &str,
    ) -> AppResult<u64> {
        let mut state = self.inner.lock().await;
        let now = Utc::now();
        let mut rewritten = 0;
        for folder in state.folders.values_mut() {
            if folder.owner_id != owner_id {
                continue;
            }
            if let Some(new_path) = rewrite_prefix(&folder.path, old_prefix, new_prefix) {
                folder.path = new_path;
                folder.updated_at = now;
                rewritten += 1;
            }
        }
        Ok(rewritten)
    }

    async fn delete_folder(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<bool> {
        let mut state = self.inner.lock().await;
        let owned = state
            .folders
            .get(&folder_id)
            .is_some_and(|f| f.owner_id == owner_id);
        if owned {
            state.folders.remove(&folder_id);
        }
        Ok(owned)
    }

    async fn folder_ancestors(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<Vec<Uuid>> {
        let state = self.inner.lock().await;
        let mut chain = Vec::new();
        let mut seen = HashSet::new();
        let mut cursor = Some(folder_id);
        while let Some(id) = cursor {
            let Some(folder) = state.folders.get(&id).filter(|f| f.owner_id == owner_id) else {
                break;
            };
            if !seen.insert(id) {
                break;
            }
            chain.push(id);
            cursor = folder.parent_id;
        }
        Ok(chain)
    }

    async fn count_child_folders(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<u64> {
        let state = self.inner.lock().await;
        Ok(state
            .folders
            .values()
            .filter(|f| f.owner_id == owner_id && f.parent_id == Some(folder_id))
            .count() as u64)
    }

    async fn count_folder_files(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<u64> {
        let state = self.inner.lock().await;
        Ok(state
            .files
            .values()
            .filter(|f| f.owner_id == owner_id && f.folder_id == Some(folder_id))
            .count() as u64)
    }

    async fn find_file(&self, owner_id: Uuid, file_id: Uuid) -> AppResult<Option<File>> {
        let state = self.inner.lock().await;
        Ok(state
            .files
            .get(&file_id)
            .filter(|f| f.owner_id == owner_id)
            .cloned())
    }

    async fn list_files(&self, owner_id: Uuid, filter: &FileFilter) -> AppResult<Vec<File>> {
        let state = self.inner.lock().await;
        let mut files: Vec<File> = state
            .files
            .values()
            .filter(|f| f.owner_id == owner_id)
            .filter(|f| filter.folder_id.is_none() || f.folder_id == filter.folder_id)
            .filter(|f| filter.kind.is_none() || Some(f.kind) == filter.kind)
            .cloned()
            .collect();
        files.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(files)
    }

    async fn insert_file(&self, data: &CreateFile) -> AppResult<File> {
        let mut state = self.inner.lock().await;
        let now = Utc::now();
        let file = File {
            id: Uuid::new_v4(),
            owner_id: data.owner_id,
            folder_id: data.folder_id,
            name: data.name.clone(),
            kind: data.kind,
            content: data.content.clone(),
            storage_path: data.storage_path.clone(),
            size: data.size,
            mime_type: data.mime_type.clone(),
            created_at: now,
            updated_at: now,
        };
        state.files.insert(file.id, file.clone());
        Ok(file)
    }

    async fn update_file_entry(
        &self,
        owner_id: Uuid,
        file_id: Uuid,
        name: &str,
        folder_id: Option<Uuid>,
    ) -> AppResult<File> {
        let mut state = self.inner.lock().await;
        let file = state
            .files
            .get_mut(&file_id)
            .filter(|f| f.owner_id == owner_id)
            .ok_or_else(|| AppError::not_found(format!("File {file_id} not found")))?;
        file.name = name.to_string();
        file.folder_id = folder_id;
        file.updated_at = Utc::now();
        Ok(file.clone())
    }

    async fn delete_file(&self, owner_id: Uuid, file_id: Uuid) -> AppResult<bool> {
        let mut state = self.inner.lock().await;
        let owned = state
            .files
            .get(&file_id)
            .is_some_and(|f| f.owner_id == owner_id);
        if owned {
            state.files.remove(&file_id);
        }
        Ok(owned)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
