//! Structural validation of namespace mutations.
//!
//! Every guard runs before any write; a guard failure leaves the
//! namespace untouched.

use std::sync::Arc;

use uuid::Uuid;

use notehub_core::error::AppError;
use notehub_core::result::AppResult;
use notehub_database::store::NamespaceStore;
use notehub_entity::folder::Folder;

/// Validates proposed mutations against current namespace state.
#[derive(Debug, Clone)]
pub struct IntegrityGuard {
    store: Arc<dyn NamespaceStore>,
}

impl IntegrityGuard {
    /// Creates a new guard over a store.
    pub fn new(store: Arc<dyn NamespaceStore>) -> Self {
        Self { store }
    }

    /// A name must be non-empty (ignoring whitespace) and must not contain
    /// the path separator.
    pub fn validate_name(name: &str) -> AppResult<()> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }
        if name.contains('/') {
            return Err(AppError::validation("Name cannot contain '/'"));
        }
        Ok(())
    }

    /// Reject a move that would make `folder_id` its own ancestor.
    ///
    /// Walks the ancestor chain of the proposed parent up to the root; the
    /// chain includes the parent itself, so moving a folder into itself is
    /// rejected by the same check. An empty chain means the parent does not
    /// exist for this owner.
    pub async fn ensure_no_cycle(
        &self,
        owner_id: Uuid,
        folder_id: Uuid,
        new_parent_id: Uuid,
    ) -> AppResult<()> {
        let ancestors = self.store.folder_ancestors(owner_id, new_parent_id).await?;
        if ancestors.is_empty() {
            return Err(AppError::not_found("Target parent folder not found"));
        }
        if ancestors.contains(&folder_id) {
            return Err(AppError::cycle(
                "Cannot move a folder into itself or one of its descendants",
            ));
        }
        Ok(())
    }

    /// Reject deletion of a folder that still has child folders or files.
    pub async fn ensure_empty(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<()> {
        let child_folders = self.store.count_child_folders(owner_id, folder_id).await?;
        let files = self.store.count_folder_files(owner_id, folder_id).await?;
        if child_folders > 0 || files > 0 {
            return Err(AppError::not_empty(format!(
                "Folder is not empty ({child_folders} subfolders, {files} files)"
            )));
        }
        Ok(())
    }

    /// Look up a folder that must exist for this owner.
    pub async fn ensure_folder_exists(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<Folder> {
        self.store
            .find_folder(owner_id, folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notehub_core::error::ErrorKind;

    #[test]
    fn empty_and_whitespace_names_are_rejected() {
        assert_eq!(
            IntegrityGuard::validate_name("").unwrap_err().kind,
            ErrorKind::Validation
        );
        assert_eq!(
            IntegrityGuard::validate_name("   ").unwrap_err().kind,
            ErrorKind::Validation
        );
    }

    #[test]
    fn separator_in_name_is_rejected() {
        assert_eq!(
            IntegrityGuard::validate_name("a/b").unwrap_err().kind,
            ErrorKind::Validation
        );
    }

    #[test]
    fn ordinary_names_pass() {
        assert!(IntegrityGuard::validate_name("Meeting notes").is_ok());
        assert!(IntegrityGuard::validate_name("2026 年报告").is_ok());
    }
}
