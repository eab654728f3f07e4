//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The content kind of a stored file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "file_kind", rename_all = "lowercase")]
pub enum FileKind {
    /// A Markdown note edited in the workspace.
    Markdown,
    /// A PDF document.
    Pdf,
    /// An image.
    Image,
    /// An office-style document.
    Document,
    /// Anything else.
    Other,
}

/// A file stored in NoteHub.
///
/// Only placement and naming concern the namespace engine; `content` and
/// `storage_path` are opaque handles owned by the content subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct File {
    /// Unique file identifier.
    pub id: Uuid,
    /// The tenant that owns this file.
    pub owner_id: Uuid,
    /// The folder containing this file (null = root-level).
    pub folder_id: Option<Uuid>,
    /// The file name (including extension).
    pub name: String,
    /// The content kind.
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Inline content (Markdown notes).
    pub content: Option<String>,
    /// Location handle within the blob storage provider.
    pub storage_path: Option<String>,
    /// File size in bytes.
    pub size: i64,
    /// MIME type of the file.
    pub mime_type: Option<String>,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
    /// When the file was last updated.
    pub updated_at: DateTime<Utc>,
}

impl File {
    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.name)
            .map(|ext| ext.to_lowercase())
    }
}

/// Data required to create a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFile {
    /// The owning tenant.
    pub owner_id: Uuid,
    /// The folder to place the file in (None = root-level).
    pub folder_id: Option<Uuid>,
    /// The file name.
    pub name: String,
    /// The content kind.
    #[serde(rename = "type")]
    pub kind: FileKind,
    /// Inline content.
    pub content: Option<String>,
    /// Location handle within the blob storage provider.
    pub storage_path: Option<String>,
    /// File size in bytes.
    pub size: i64,
    /// MIME type.
    pub mime_type: Option<String>,
}
