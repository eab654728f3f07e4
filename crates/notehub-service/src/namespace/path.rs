//! Materialized path resolution.

use std::sync::Arc;

use uuid::Uuid;

use notehub_core::error::AppError;
use notehub_core::result::AppResult;
use notehub_database::store::NamespaceStore;

/// Join a parent path and a name into a materialized path.
///
/// A root-level entry's path is its bare name; everything else is
/// `parent_path + "/" + name`. Create, rename, and move all format paths
/// through this one function so the path shape can never diverge between
/// code paths.
pub fn join_path(parent_path: Option<&str>, name: &str) -> String {
    match parent_path {
        Some(parent) => format!("{parent}/{name}"),
        None => name.to_string(),
    }
}

/// Computes a folder's materialized path from its parent's stored path.
#[derive(Debug, Clone)]
pub struct PathResolver {
    store: Arc<dyn NamespaceStore>,
}

impl PathResolver {
    /// Creates a new resolver over a store.
    pub fn new(store: Arc<dyn NamespaceStore>) -> Self {
        Self { store }
    }

    /// Compute the path an entry named `name` would have under `parent_id`.
    ///
    /// Fails with `NotFound` when the parent does not exist for this owner
    /// (including when it exists but belongs to another tenant).
    pub async fn compute_path(
        &self,
        owner_id: Uuid,
        parent_id: Option<Uuid>,
        name: &str,
    ) -> AppResult<String> {
        match parent_id {
            None => Ok(join_path(None, name)),
            Some(parent_id) => {
                let parent = self
                    .store
                    .find_folder(owner_id, parent_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Parent folder not found"))?;
                Ok(join_path(Some(&parent.path), name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_the_bare_name() {
        assert_eq!(join_path(None, "notes"), "notes");
    }

    #[test]
    fn nested_path_joins_with_slash() {
        assert_eq!(join_path(Some("projects/2026"), "reports"), "projects/2026/reports");
    }
}
