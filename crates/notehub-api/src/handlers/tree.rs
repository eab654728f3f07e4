//! Tree handler: the authoritative, server-assembled forest.

use axum::Json;
use axum::extract::{Query, State};

use notehub_entity::tree::TreeNode;

use crate::dto::request::TreeQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::OwnerContext;
use crate::state::AppState;

/// GET /api/tree?search=
///
/// Clients fetch this instead of assembling their own tree; after a
/// mutation they either re-fetch or patch in the record the mutation
/// returned.
pub async fn get_tree(
    State(state): State<AppState>,
    owner: OwnerContext,
    Query(query): Query<TreeQuery>,
) -> Result<Json<ApiResponse<Vec<TreeNode>>>, ApiError> {
    let forest = state
        .tree_service
        .get_forest(&owner, query.search.as_deref())
        .await?;
    Ok(Json(ApiResponse::ok(forest)))
}
