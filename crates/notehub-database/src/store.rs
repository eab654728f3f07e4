//! Store contract for the namespace engine.
//!
//! Every method is tenant-scoped: an `owner_id` is required and rows
//! belonging to other owners are invisible — a lookup for a foreign-owned
//! record behaves exactly like a lookup for a missing one.

use async_trait::async_trait;
use uuid::Uuid;

use notehub_core::result::AppResult;
use notehub_entity::file::{CreateFile, File, FileKind};
use notehub_entity::folder::{CreateFolder, Folder};

/// Optional filters for file listings.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct FileFilter {
    /// Only files placed directly in this folder.
    pub folder_id: Option<Uuid>,
    /// Only files of this content kind.
    pub kind: Option<FileKind>,
}

/// Persistence contract used by the namespace services.
///
/// Implemented by [`crate::PostgresNamespaceStore`] (authoritative) and
/// [`crate::MemoryNamespaceStore`] (tests, local development).
#[async_trait]
pub trait NamespaceStore: Send + Sync + std::fmt::Debug + 'static {
    // ── Folders ──────────────────────────────────────────────

    /// Find a folder by ID.
    async fn find_folder(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<Option<Folder>>;

    /// List all folders for an owner, ordered by path.
    async fn list_folders(&self, owner_id: Uuid) -> AppResult<Vec<Folder>>;

    /// Insert a new folder. Fails with `Conflict` if the path is taken.
    async fn insert_folder(&self, data: &CreateFolder) -> AppResult<Folder>;

    /// Update a folder's name, parent, and materialized path in one write.
    async fn update_folder_entry(
        &self,
        owner_id: Uuid,
        folder_id: Uuid,
        name: &str,
        parent_id: Option<Uuid>,
        path: &str,
    ) -> AppResult<Folder>;

    /// Rewrite the path prefix of every folder whose path is `old_prefix`
    /// or starts with `old_prefix + "/"`. The suffix after the prefix is
    /// preserved verbatim. Returns the number of rows rewritten.
    ///
    /// This is a prefix rewrite keyed on prefix length, never a substring
    /// replace, and it is idempotent: rows already carrying the new prefix
    /// no longer match, so a re-run converges.
    async fn rewrite_descendant_paths(
        &self,
        owner_id: Uuid,
        old_prefix: &str,
        new_prefix: &str,
    ) -> AppResult<u64>;

    /// Delete a folder. Returns `true` if a row was deleted.
    async fn delete_folder(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<bool>;

    /// The ancestor chain of a folder, from the folder itself up to its
    /// root, as IDs. Empty when the folder does not exist for this owner.
    async fn folder_ancestors(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<Vec<Uuid>>;

    /// Count direct child folders.
    async fn count_child_folders(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<u64>;

    /// Count files placed directly in a folder.
    async fn count_folder_files(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<u64>;

    // ── Files ────────────────────────────────────────────────

    /// Find a file by ID.
    async fn find_file(&self, owner_id: Uuid, file_id: Uuid) -> AppResult<Option<File>>;

    /// List files for an owner, ordered by name.
    async fn list_files(&self, owner_id: Uuid, filter: &FileFilter) -> AppResult<Vec<File>>;

    /// Insert a new file record.
    async fn insert_file(&self, data: &CreateFile) -> AppResult<File>;

    /// Update a file's name and folder placement.
    async fn update_file_entry(
        &self,
        owner_id: Uuid,
        file_id: Uuid,
        name: &str,
        folder_id: Option<Uuid>,
    ) -> AppResult<File>;

    /// Delete a file. Returns `true` if a row was deleted.
    async fn delete_file(&self, owner_id: Uuid, file_id: Uuid) -> AppResult<bool>;

    // ── Health ───────────────────────────────────────────────

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Rewrite `path` from `old_prefix` to `new_prefix` if and only if `path`
/// *is* the old prefix or sits strictly under it.
///
/// This is the row-level contract behind
/// [`NamespaceStore::rewrite_descendant_paths`]: the prefix is matched on
/// whole path segments keyed on its length, and the suffix is carried over
/// verbatim. A path that merely contains `old_prefix` as a substring
/// elsewhere (e.g. a sibling named like an ancestor segment) returns `None`.
pub fn rewrite_prefix(path: &str, old_prefix: &str, new_prefix: &str) -> Option<String> {
    if path == old_prefix {
        return Some(new_prefix.to_string());
    }
    let rest = path.strip_prefix(old_prefix)?;
    if rest.starts_with('/') {
        Some(format!("{new_prefix}{rest}"))
    } else {
        None
    }
}
