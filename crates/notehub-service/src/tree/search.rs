//! Substring search over an assembled forest, preserving ancestor context.

use notehub_entity::tree::TreeNode;

/// Filter a forest down to nodes whose name contains `term`
/// (case-insensitive), keeping non-matching ancestors of any match as
/// context. An empty term returns the forest unchanged; a forest with no
/// surviving nodes is a valid "no matches" result.
pub fn search(forest: Vec<TreeNode>, term: &str) -> Vec<TreeNode> {
    if term.is_empty() {
        return forest;
    }
    let needle = term.to_lowercase();
    filter_nodes(forest, &needle)
}

fn filter_nodes(nodes: Vec<TreeNode>, needle: &str) -> Vec<TreeNode> {
    nodes
        .into_iter()
        .filter_map(|mut node| {
            let matches = node.name.to_lowercase().contains(needle);
            node.children = filter_nodes(std::mem::take(&mut node.children), needle);
            if matches || !node.children.is_empty() {
                Some(node)
            } else {
                None
            }
        })
        .collect()
}
