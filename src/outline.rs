//! Outline extraction and list-level outline edits.
//!
//! The outline is always a projection of the buffer: it is recomputed from text
//! on demand and never edited into a shape the text cannot reproduce. The list
//! helpers here only prepare a desired outline for the rewriters.

use crate::config::Config;
use crate::formats::{split_lines, HeadingScan};
use crate::node::{NodeId, OutlineNode};

#[must_use]
/// Extract the outline of `text` using the default configuration.
pub fn extract(text: &str) -> Vec<OutlineNode> {
    extract_with(text, &Config::default())
}

#[must_use]
/// Extract one node per heading line, in line order.
pub fn extract_with(text: &str, config: &Config) -> Vec<OutlineNode> {
    let lines = split_lines(text);
    let scan = HeadingScan::new(&lines, config);
    outline_from_scan(&scan)
}

pub(crate) fn outline_from_scan(scan: &HeadingScan) -> Vec<OutlineNode> {
    scan.headings
        .iter()
        .enumerate()
        .filter_map(|(line, heading)| {
            heading
                .as_ref()
                .map(|h| OutlineNode::new(h.level, h.text.clone(), line))
        })
        .collect()
}

#[must_use]
/// The nodes that have no ancestor within the list, in list order.
pub fn top_level_nodes(nodes: &[OutlineNode]) -> Vec<&OutlineNode> {
    let mut shallowest = u8::MAX;
    nodes
        .iter()
        .filter(|node| {
            let top = node.level <= shallowest;
            shallowest = shallowest.min(node.level);
            top
        })
        .collect()
}

#[must_use]
/// One past the last descendant of `nodes[index]`: the next node at the same or a
/// shallower level, or the end of the list.
pub fn subtree_end(nodes: &[OutlineNode], index: usize) -> usize {
    let Some(level) = nodes.get(index).map(|node| node.level) else {
        return nodes.len();
    };
    nodes
        .iter()
        .enumerate()
        .skip(index + 1)
        .find(|(_, node)| node.level <= level)
        .map_or(nodes.len(), |(i, _)| i)
}

#[must_use]
/// Move the node at `from` together with its descendants so the block lands at `to`.
///
/// Moving up, the block starts at `to`; moving down, it follows the node at `to`
/// and that node's own descendants.
/// Returns `None` for out-of-range indices or a target inside the moved block.
pub fn move_subtree(nodes: &[OutlineNode], from: usize, to: usize) -> Option<Vec<OutlineNode>> {
    if from >= nodes.len() || to >= nodes.len() {
        return None;
    }
    let end = subtree_end(nodes, from);
    if (from..end).contains(&to) {
        return None;
    }

    let at = if to < from {
        to
    } else {
        subtree_end(nodes, to) - (end - from)
    };
    let mut moved = nodes.to_vec();
    let block: Vec<OutlineNode> = moved.drain(from..end).collect();
    moved.splice(at..at, block);
    Some(moved)
}

/// Flip the folding state of the node with `id`. Returns whether it was found.
pub fn toggle_collapsed(nodes: &mut [OutlineNode], id: &NodeId) -> bool {
    match nodes.iter_mut().find(|node| &node.id == id) {
        Some(node) => {
            node.collapsed = !node.collapsed;
            true
        }
        None => false,
    }
}

#[must_use]
/// Render the outline as an indented list, one `#`-marked line per node.
pub fn render_tree(nodes: &[OutlineNode]) -> String {
    nodes
        .iter()
        .map(|node| {
            let indent = "  ".repeat(usize::from(node.level.saturating_sub(1)));
            let hashes = "#".repeat(usize::from(node.level));
            format!("[{}] {indent}{hashes} {}", node.line + 1, node.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "tests/outline.rs"]
mod tests;
