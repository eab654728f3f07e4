//! Request extractors.

pub mod owner;

pub use owner::OwnerContext;
