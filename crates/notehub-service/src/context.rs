//! Request context carrying the acting tenant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current request.
///
/// Extracted at the HTTP boundary and passed into service methods so that
/// every operation knows *which tenant* is acting. All reads and writes
/// are scoped by this owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The owning tenant's ID.
    pub owner_id: Uuid,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(owner_id: Uuid) -> Self {
        Self {
            owner_id,
            request_time: Utc::now(),
        }
    }
}
