//! Request DTOs with validation.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use notehub_entity::file::FileKind;

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// `None` means the field was not present in the request body at all;
/// `Some(None)` means the client sent an explicit `null` (move to root).
fn double_option<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

/// Create folder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Parent folder ID (omit for root-level).
    pub parent_id: Option<Uuid>,
    /// Folder name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// Update folder request: rename and/or move.
///
/// `parent_id: null` moves the folder to the root; omitting `parent_id`
/// leaves the parent unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFolderRequest {
    /// New name.
    pub name: Option<String>,
    /// New parent (explicit `null` = root, absent = keep current).
    #[serde(default, deserialize_with = "double_option")]
    pub parent_id: Option<Option<Uuid>>,
}

/// Create file request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFileRequest {
    /// Folder to place the file in (omit for root-level).
    pub folder_id: Option<Uuid>,
    /// File name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Content kind.
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Inline content (Markdown notes).
    pub content: Option<String>,
    /// Opaque blob storage handle.
    pub storage_path: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size: i64,
    /// MIME type.
    pub mime_type: Option<String>,
}

/// Update file request: rename and/or move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFileRequest {
    /// New name.
    pub name: Option<String>,
    /// New folder (explicit `null` = root, absent = keep current).
    #[serde(default, deserialize_with = "double_option")]
    pub folder_id: Option<Option<Uuid>>,
}

/// Query parameters for file listings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileListQuery {
    /// Only files placed directly in this folder.
    pub folder_id: Option<Uuid>,
    /// Only files of this content kind.
    #[serde(rename = "type")]
    pub kind: Option<FileKind>,
}

/// Query parameters for the tree endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TreeQuery {
    /// Substring filter applied to the assembled forest.
    pub search: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_parent_differs_from_explicit_null() {
        let absent: UpdateFolderRequest = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert_eq!(absent.parent_id, None);

        let explicit_root: UpdateFolderRequest =
            serde_json::from_str(r#"{"parent_id":null}"#).unwrap();
        assert_eq!(explicit_root.parent_id, Some(None));

        let id = Uuid::new_v4();
        let reparent: UpdateFolderRequest =
            serde_json::from_str(&format!(r#"{{"parent_id":"{id}"}}"#)).unwrap();
        assert_eq!(reparent.parent_id, Some(Some(id)));
    }

    #[test]
    fn file_kind_uses_the_type_field() {
        let req: CreateFileRequest =
            serde_json::from_str(r#"{"name":"a.md","type":"markdown"}"#).unwrap();
        assert_eq!(req.kind, FileKind::Markdown);
        assert_eq!(req.size, 0);
    }
}
