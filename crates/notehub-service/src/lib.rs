//! # notehub-service
//!
//! Business logic layer for NoteHub. The namespace engine lives here:
//! path resolution, mutation guards, cascade propagation, and tree
//! assembly, orchestrated by the folder/file/tree services.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod file;
pub mod folder;
pub mod namespace;
pub mod tree;

pub use context::RequestContext;
pub use file::FileService;
pub use folder::FolderService;
pub use namespace::{CascadeUpdater, IntegrityGuard, OwnerLocks, PathResolver};
pub use tree::TreeService;
