//! PostgreSQL implementation of the namespace store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_entity::file::{CreateFile, File};
use notehub_entity::folder::{CreateFolder, Folder};

use crate::store::{FileFilter, NamespaceStore};

/// Authoritative store backed by PostgreSQL.
#[derive(Debug, Clone)]
pub struct PostgresNamespaceStore {
    pool: PgPool,
}

impl PostgresNamespaceStore {
    /// Create a new store over an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape `%`, `_`, and the escape character itself so a path can be used
/// verbatim inside a `LIKE ... ESCAPE '\'` pattern.
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl NamespaceStore for PostgresNamespaceStore {
    async fn find_folder(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE owner_id = $1 AND id = $2")
            .bind(owner_id)
            .bind(folder_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    async fn list_folders(&self, owner_id: Uuid) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE owner_id = $1 ORDER BY path ASC")
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    async fn insert_folder(&self, data: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (owner_id, parent_id, name, path) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(data.parent_id)
        .bind(&data.name)
        .bind(&data.path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("folders_owner_id_path_key") =>
            {
                AppError::conflict(format!("Folder path '{}' already exists", data.path))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create folder", e),
        })
    }

    async fn update_folder_entry(
        &self,
        owner_id: Uuid,
        folder_id: Uuid,
        name: &str,
        parent_id: Option<Uuid>,
        path: &str,
    ) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET name = $3, parent_id = $4, path = $5, updated_at = NOW() \
             WHERE owner_id = $1 AND id = $2 RETURNING *",
        )
        .bind(owner_id)
        .bind(folder_id)
        .bind(name)
        .bind(parent_id)
        .bind(path)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("folders_owner_id_path_key") =>
            {
                AppError::conflict(format!("Folder path '{path}' already exists"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update folder", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))
    }

    async fn rewrite_descendant_paths(
        &self,
        owner_id: Uuid,
        old_prefix: &str,
        new_prefix: &str,
    ) -> AppResult<u64> {
        // Strict prefix rewrite keyed on prefix length. The LIKE pattern is
        // only used to select rows; the new path is spliced with substr so a
        // path merely containing the old prefix elsewhere is never touched.
        let pattern = format!("{}/%", escape_like(old_prefix));
        let result = sqlx::query(
            "UPDATE folders \
             SET path = $3 || substr(path, char_length($2::text) + 1), updated_at = NOW() \
             WHERE owner_id = $1 AND (path = $2 OR path LIKE $4 ESCAPE '\\')",
        )
        .bind(owner_id)
        .bind(old_prefix)
        .bind(new_prefix)
        .bind(&pattern)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to rewrite descendant paths", e)
        })?;
        Ok(result.rows_affected())
    }

    async fn delete_folder(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE owner_id = $1 AND id = $2")
            .bind(owner_id)
            .bind(folder_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn folder_ancestors(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "WITH RECURSIVE ancestors AS ( \
                SELECT id, parent_id, 0 AS depth FROM folders \
                 WHERE owner_id = $1 AND id = $2 \
                UNION ALL \
                SELECT f.id, f.parent_id, a.depth + 1 \
                  FROM folders f INNER JOIN ancestors a ON f.id = a.parent_id \
                 WHERE f.owner_id = $1 \
             ) SELECT id FROM ancestors ORDER BY depth ASC",
        )
        .bind(owner_id)
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find ancestors", e))
    }

    async fn count_child_folders(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM folders WHERE owner_id = $1 AND parent_id = $2")
                .bind(owner_id)
                .bind(folder_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count children", e)
                })?;
        Ok(count as u64)
    }

    async fn count_folder_files(&self, owner_id: Uuid, folder_id: Uuid) -> AppResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM files WHERE owner_id = $1 AND folder_id = $2")
                .bind(owner_id)
                .bind(folder_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count files", e))?;
        Ok(count as u64)
    }

    async fn find_file(&self, owner_id: Uuid, file_id: Uuid) -> AppResult<Option<File>> {
        sqlx::query_as::<_, File>("SELECT * FROM files WHERE owner_id = $1 AND id = $2")
            .bind(owner_id)
            .bind(file_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    async fn list_files(&self, owner_id: Uuid, filter: &FileFilter) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files WHERE owner_id = $1 \
               AND ($2::uuid IS NULL OR folder_id = $2) \
               AND ($3::file_kind IS NULL OR kind = $3) \
             ORDER BY name ASC, id ASC",
        )
        .bind(owner_id)
        .bind(filter.folder_id)
        .bind(filter.kind)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    async fn insert_file(&self, data: &CreateFile) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "INSERT INTO files (owner_id, folder_id, name, kind, content, storage_path, size, mime_type) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(data.owner_id)
        .bind(data.folder_id)
        .bind(&data.name)
        .bind(data.kind)
        .bind(&data.content)
        .bind(&data.storage_path)
        .bind(data.size)
        .bind(&data.mime_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file", e))
    }

    async fn update_file_entry(
        &self,
        owner_id: Uuid,
        file_id: Uuid,
        name: &str,
        folder_id: Option<Uuid>,
    ) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "UPDATE files SET name = $3, folder_id = $4, updated_at = NOW() \
             WHERE owner_id = $1 AND id = $2 RETURNING *",
        )
        .bind(owner_id)
        .bind(file_id)
        .bind(name)
        .bind(folder_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update file", e))?
        .ok_or_else(|| AppError::not_found(format!("File {file_id} not found")))
    }

    async fn delete_file(&self, owner_id: Uuid, file_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM files WHERE owner_id = $1 AND id = $2")
            .bind(owner_id)
            .bind(file_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete file", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
