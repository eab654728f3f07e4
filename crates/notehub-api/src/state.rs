//! Application state shared across all handlers.

use std::sync::Arc;

use notehub_core::config::AppConfig;
use notehub_database::store::NamespaceStore;
use notehub_service::{FileService, FolderService, OwnerLocks, TreeService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The namespace store (health checks).
    pub store: Arc<dyn NamespaceStore>,
    /// Folder service.
    pub folder_service: Arc<FolderService>,
    /// File service.
    pub file_service: Arc<FileService>,
    /// Tree service.
    pub tree_service: Arc<TreeService>,
}

impl AppState {
    /// Wire up services over a store.
    pub fn build(config: Arc<AppConfig>, store: Arc<dyn NamespaceStore>) -> Self {
        let locks = Arc::new(OwnerLocks::new());
        Self {
            config,
            folder_service: Arc::new(FolderService::new(Arc::clone(&store), locks)),
            file_service: Arc::new(FileService::new(Arc::clone(&store))),
            tree_service: Arc::new(TreeService::new(Arc::clone(&store))),
            store,
        }
    }
}
