//! Assembles flat folder/file collections into an ordered forest.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use notehub_entity::file::File;
use notehub_entity::folder::Folder;
use notehub_entity::tree::{NodeKind, TreeNode};

/// Build an ordered forest from owner-scoped folder and file collections.
///
/// Folders attach to their parent when it is present in the collection; a
/// folder whose parent is missing (or foreign-owned, and therefore absent
/// from the owner-filtered input) is promoted to a root rather than
/// silently dropped. Files attach to their folder the same way.
///
/// Every sibling list is sorted folders-first, then case-insensitively by
/// name; ties keep the original input order. The result is deterministic
/// for a given input regardless of storage read order.
pub fn build_forest(folders: &[Folder], files: &[File]) -> Vec<TreeNode> {
    let index: HashSet<Uuid> = folders.iter().map(|f| f.id).collect();

    let mut child_folders: HashMap<Uuid, Vec<&Folder>> = HashMap::new();
    let mut root_folders: Vec<&Folder> = Vec::new();
    for folder in folders {
        match folder.parent_id.filter(|pid| index.contains(pid)) {
            Some(parent_id) => child_folders.entry(parent_id).or_default().push(folder),
            None => root_folders.push(folder),
        }
    }

    let mut folder_files: HashMap<Uuid, Vec<&File>> = HashMap::new();
    let mut root_files: Vec<&File> = Vec::new();
    for file in files {
        match file.folder_id.filter(|fid| index.contains(fid)) {
            Some(folder_id) => folder_files.entry(folder_id).or_default().push(file),
            None => root_files.push(file),
        }
    }

    let mut forest: Vec<TreeNode> = root_folders
        .into_iter()
        .map(|folder| build_folder_node(folder, &child_folders, &folder_files))
        .collect();
    forest.extend(root_files.into_iter().map(file_node));
    sort_siblings(&mut forest);
    forest
}

fn build_folder_node(
    folder: &Folder,
    child_folders: &HashMap<Uuid, Vec<&Folder>>,
    folder_files: &HashMap<Uuid, Vec<&File>>,
) -> TreeNode {
    let mut children: Vec<TreeNode> = child_folders
        .get(&folder.id)
        .into_iter()
        .flatten()
        .map(|child| build_folder_node(child, child_folders, folder_files))
        .collect();
    children.extend(
        folder_files
            .get(&folder.id)
            .into_iter()
            .flatten()
            .copied()
            .map(file_node),
    );
    sort_siblings(&mut children);

    TreeNode {
        id: folder.id,
        name: folder.name.clone(),
        kind: NodeKind::Folder,
        path: folder.path.clone(),
        children,
    }
}

fn file_node(file: &File) -> TreeNode {
    TreeNode {
        id: file.id,
        name: file.name.clone(),
        kind: NodeKind::File,
        path: file.name.clone(),
        children: Vec::new(),
    }
}

/// Folders before files; within a kind, case-insensitive by name. The sort
/// is stable, so equal keys keep their original input order.
fn sort_siblings(nodes: &mut [TreeNode]) {
    nodes.sort_by_cached_key(|node| {
        let rank = match node.kind {
            NodeKind::Folder => 0u8,
            NodeKind::File => 1,
        };
        (rank, node.name.to_lowercase())
    });
}
