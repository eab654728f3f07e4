//! The hierarchical namespace engine.
//!
//! Four components cooperate on every folder mutation, in order:
//! [`IntegrityGuard`] validates the request against current state,
//! [`PathResolver`] computes the new materialized path, the store applies
//! the single-row write, and [`CascadeUpdater`] propagates a changed path
//! to all descendants. [`OwnerLocks`] serializes mutations per tenant so
//! two overlapping cascades can never interleave.

pub mod cascade;
pub mod guard;
pub mod locks;
pub mod path;

pub use cascade::CascadeUpdater;
pub use guard::IntegrityGuard;
pub use locks::OwnerLocks;
pub use path::PathResolver;
