//! `OwnerContext` extractor — reads the tenant identity the upstream auth
//! proxy attaches to every request and injects a request context.
//!
//! Authentication itself happens outside this service; by the time a
//! request reaches these routes the proxy has already verified the user
//! and stamped their ID into the `x-user-id` header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use notehub_core::error::AppError;
use notehub_service::context::RequestContext;

use crate::error::ApiError;

/// Extracted tenant context available in handlers.
#[derive(Debug, Clone)]
pub struct OwnerContext(pub RequestContext);

impl std::ops::Deref for OwnerContext {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for OwnerContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::validation("Missing x-user-id header"))?;

        let owner_id = header
            .parse::<Uuid>()
            .map_err(|_| AppError::validation("Invalid x-user-id header"))?;

        Ok(OwnerContext(RequestContext::new(owner_id)))
    }
}
