//! Tree node types for hierarchical display.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whether a tree node is a folder or a leaf file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A folder that may contain children.
    Folder,
    /// A leaf file.
    File,
}

/// A node in the assembled folder/file forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    /// Folder or file ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Node kind.
    pub kind: NodeKind,
    /// Materialized path for folders, bare name for files.
    pub path: String,
    /// Ordered child nodes (folders first, then files).
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Whether this node is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }
}
