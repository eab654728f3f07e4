//! # notehub-api
//!
//! HTTP API layer for NoteHub. Maps the namespace engine's operations
//! onto `/api` routes, with the acting tenant supplied by the upstream
//! auth proxy through the `x-user-id` header.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
