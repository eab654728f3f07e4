//! Forest retrieval for presentation.

use std::sync::Arc;

use notehub_core::result::AppResult;
use notehub_database::store::{FileFilter, NamespaceStore};
use notehub_entity::tree::TreeNode;

use crate::context::RequestContext;
use crate::tree::{assembler, search};

/// Assembles the owner's folders and files into an ordered forest.
///
/// This is the authoritative tree: clients re-fetch it (or apply the
/// records returned by mutations) instead of maintaining their own copy.
#[derive(Debug, Clone)]
pub struct TreeService {
    /// Namespace store.
    store: Arc<dyn NamespaceStore>,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(store: Arc<dyn NamespaceStore>) -> Self {
        Self { store }
    }

    /// Build the owner's forest, optionally filtered by a search term.
    pub async fn get_forest(
        &self,
        ctx: &RequestContext,
        term: Option<&str>,
    ) -> AppResult<Vec<TreeNode>> {
        let folders = self.store.list_folders(ctx.owner_id).await?;
        let files = self
            .store
            .list_files(ctx.owner_id, &FileFilter::default())
            .await?;

        let forest = assembler::build_forest(&folders, &files);
        Ok(match term {
            Some(term) => search::search(forest, term),
            None => forest,
        })
    }
}
