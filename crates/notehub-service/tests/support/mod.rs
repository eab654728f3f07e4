//! Shared helpers for service tests, running on the in-memory store.

#![allow(dead_code)]

use std::sync::Arc;

use uuid::Uuid;

use notehub_database::{MemoryNamespaceStore, NamespaceStore};
use notehub_entity::file::{File, FileKind};
use notehub_entity::folder::Folder;
use notehub_service::file::service::CreateFileRequest;
use notehub_service::folder::service::CreateFolderRequest;
use notehub_service::{FileService, FolderService, OwnerLocks, RequestContext, TreeService};

pub struct TestEnv {
    pub folders: FolderService,
    pub files: FileService,
    pub tree: TreeService,
}

pub fn env() -> TestEnv {
    let store: Arc<dyn NamespaceStore> = Arc::new(MemoryNamespaceStore::new());
    let locks = Arc::new(OwnerLocks::new());
    TestEnv {
        folders: FolderService::new(Arc::clone(&store), locks),
        files: FileService::new(Arc::clone(&store)),
        tree: TreeService::new(store),
    }
}

pub fn ctx() -> RequestContext {
    RequestContext::new(Uuid::new_v4())
}

pub async fn mkdir(
    env: &TestEnv,
    ctx: &RequestContext,
    parent_id: Option<Uuid>,
    name: &str,
) -> Folder {
    env.folders
        .create_folder(
            ctx,
            CreateFolderRequest {
                parent_id,
                name: name.to_string(),
            },
        )
        .await
        .expect("create folder")
}

pub async fn mkfile(
    env: &TestEnv,
    ctx: &RequestContext,
    folder_id: Option<Uuid>,
    name: &str,
    kind: FileKind,
) -> File {
    env.files
        .create_file(
            ctx,
            CreateFileRequest {
                folder_id,
                name: name.to_string(),
                kind,
                content: None,
                storage_path: None,
                size: 0,
                mime_type: None,
            },
        )
        .await
        .expect("create file")
}
