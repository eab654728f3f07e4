//! File entity.

pub mod model;

pub use model::{CreateFile, File, FileKind};
