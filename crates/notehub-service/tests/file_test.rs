//! File operation tests: placement, filters, isolation. Files never cascade.

mod support;

use notehub_core::error::ErrorKind;
use notehub_database::FileFilter;
use notehub_entity::file::FileKind;
use support::{ctx, env, mkdir, mkfile};
use uuid::Uuid;

#[tokio::test]
async fn create_file_at_root_and_in_folder() {
    let env = env();
    let ctx = ctx();

    let root_file = mkfile(&env, &ctx, None, "scratch.md", FileKind::Markdown).await;
    assert_eq!(root_file.folder_id, None);

    let folder = mkdir(&env, &ctx, None, "docs").await;
    let nested = mkfile(&env, &ctx, Some(folder.id), "spec.pdf", FileKind::Pdf).await;
    assert_eq!(nested.folder_id, Some(folder.id));
}

#[tokio::test]
async fn create_file_in_missing_folder_is_not_found() {
    let env = env();
    let ctx = ctx();

    let err = env
        .files
        .create_file(
            &ctx,
            notehub_service::file::service::CreateFileRequest {
                folder_id: Some(Uuid::new_v4()),
                name: "lost.md".to_string(),
                kind: FileKind::Markdown,
                content: None,
                storage_path: None,
                size: 0,
                mime_type: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn invalid_file_names_are_rejected() {
    let env = env();
    let ctx = ctx();

    for bad in ["", "  ", "a/b.md"] {
        let err = env
            .files
            .create_file(
                &ctx,
                notehub_service::file::service::CreateFileRequest {
                    folder_id: None,
                    name: bad.to_string(),
                    kind: FileKind::Other,
                    content: None,
                    storage_path: None,
                    size: 0,
                    mime_type: None,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation, "name {bad:?}");
    }
}

#[tokio::test]
async fn rename_file_keeps_placement() {
    let env = env();
    let ctx = ctx();

    let folder = mkdir(&env, &ctx, None, "docs").await;
    let file = mkfile(&env, &ctx, Some(folder.id), "draft.md", FileKind::Markdown).await;

    let renamed = env
        .files
        .rename_file(&ctx, file.id, "final.md")
        .await
        .unwrap();
    assert_eq!(renamed.name, "final.md");
    assert_eq!(renamed.folder_id, Some(folder.id));
}

#[tokio::test]
async fn move_file_between_folders_and_to_root() {
    let env = env();
    let ctx = ctx();

    let src = mkdir(&env, &ctx, None, "src").await;
    let dst = mkdir(&env, &ctx, None, "dst").await;
    let file = mkfile(&env, &ctx, Some(src.id), "note.md", FileKind::Markdown).await;

    let moved = env
        .files
        .move_file(&ctx, file.id, Some(dst.id))
        .await
        .unwrap();
    assert_eq!(moved.folder_id, Some(dst.id));

    let rooted = env.files.move_file(&ctx, file.id, None).await.unwrap();
    assert_eq!(rooted.folder_id, None);
}

#[tokio::test]
async fn move_file_to_missing_folder_is_not_found() {
    let env = env();
    let ctx = ctx();

    let file = mkfile(&env, &ctx, None, "note.md", FileKind::Markdown).await;
    let err = env
        .files
        .move_file(&ctx, file.id, Some(Uuid::new_v4()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn delete_file_needs_no_emptiness_guard() {
    let env = env();
    let ctx = ctx();

    let file = mkfile(&env, &ctx, None, "note.md", FileKind::Markdown).await;
    env.files.delete_file(&ctx, file.id).await.unwrap();

    let err = env.files.get_file(&ctx, file.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let err = env.files.delete_file(&ctx, file.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn list_files_filters_by_folder_and_kind() {
    let env = env();
    let ctx = ctx();

    let docs = mkdir(&env, &ctx, None, "docs").await;
    mkfile(&env, &ctx, Some(docs.id), "b.md", FileKind::Markdown).await;
    mkfile(&env, &ctx, Some(docs.id), "a.pdf", FileKind::Pdf).await;
    mkfile(&env, &ctx, None, "root.md", FileKind::Markdown).await;

    let all = env.files.list_files(&ctx, &FileFilter::default()).await.unwrap();
    let names: Vec<&str> = all.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a.pdf", "b.md", "root.md"]);

    let in_docs = env
        .files
        .list_files(
            &ctx,
            &FileFilter {
                folder_id: Some(docs.id),
                kind: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(in_docs.len(), 2);

    let markdown_in_docs = env
        .files
        .list_files(
            &ctx,
            &FileFilter {
                folder_id: Some(docs.id),
                kind: Some(FileKind::Markdown),
            },
        )
        .await
        .unwrap();
    assert_eq!(markdown_in_docs.len(), 1);
    assert_eq!(markdown_in_docs[0].name, "b.md");
}

#[tokio::test]
async fn tenants_cannot_touch_each_others_files() {
    let env = env();
    let alice = ctx();
    let mallory = ctx();

    let file = mkfile(&env, &alice, None, "secret.md", FileKind::Markdown).await;

    let err = env.files.get_file(&mallory, file.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let err = env
        .files
        .rename_file(&mallory, file.id, "mine.md")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    let err = env.files.delete_file(&mallory, file.id).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);

    assert!(env
        .files
        .list_files(&mallory, &FileFilter::default())
        .await
        .unwrap()
        .is_empty());
}
