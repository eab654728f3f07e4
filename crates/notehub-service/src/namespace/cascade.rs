//! Cascade propagation of folder path changes.

use std::sync::Arc;

use tracing::{debug, error, warn};
use uuid::Uuid;

use notehub_core::error::{AppError, ErrorKind};
use notehub_core::result::AppResult;
use notehub_database::store::NamespaceStore;

/// Propagates a folder's path change to every descendant folder.
///
/// The rewrite replaces the `old_path` prefix with `new_path` and keeps the
/// remainder of each descendant's path verbatim; it never does substring
/// replacement. Because already-rewritten rows no longer match the old
/// prefix, the operation is idempotent and a re-run after a partial failure
/// converges to the correct final state.
///
/// Files are not touched: a file's placement is its `folder_id`, which an
/// ancestor's path change does not affect.
#[derive(Debug, Clone)]
pub struct CascadeUpdater {
    store: Arc<dyn NamespaceStore>,
}

impl CascadeUpdater {
    /// Creates a new cascade updater over a store.
    pub fn new(store: Arc<dyn NamespaceStore>) -> Self {
        Self { store }
    }

    /// Rewrite descendant paths from `old_path` to `new_path`.
    ///
    /// Returns the number of folders rewritten. A failed rewrite is retried
    /// once (the operation is idempotent); if the retry also fails the error
    /// is escalated to `CascadeFailure` — the namespace may be inconsistent
    /// until the rewrite is re-run, so this is logged at error level and
    /// must not be swallowed by callers.
    pub async fn propagate(
        &self,
        owner_id: Uuid,
        old_path: &str,
        new_path: &str,
    ) -> AppResult<u64> {
        if old_path == new_path {
            return Ok(0);
        }

        match self
            .store
            .rewrite_descendant_paths(owner_id, old_path, new_path)
            .await
        {
            Ok(rewritten) => {
                debug!(
                    owner_id = %owner_id,
                    old_path,
                    new_path,
                    rewritten,
                    "Descendant paths rewritten"
                );
                Ok(rewritten)
            }
            Err(first) => {
                warn!(
                    owner_id = %owner_id,
                    old_path,
                    new_path,
                    error = %first,
                    "Descendant path rewrite failed, retrying"
                );
                match self
                    .store
                    .rewrite_descendant_paths(owner_id, old_path, new_path)
                    .await
                {
                    Ok(rewritten) => Ok(rewritten),
                    Err(second) => {
                        error!(
                            owner_id = %owner_id,
                            old_path,
                            new_path,
                            error = %second,
                            "Cascade propagation failed; namespace may be inconsistent"
                        );
                        Err(AppError::with_source(
                            ErrorKind::CascadeFailure,
                            format!(
                                "Failed to rewrite descendant paths from '{old_path}' to '{new_path}'"
                            ),
                            second,
                        ))
                    }
                }
            }
        }
    }
}
