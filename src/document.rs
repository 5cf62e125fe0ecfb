//! Immutable document snapshots bridging the buffer and its outline.
//!
//! The buffer is the single source of truth. A structural edit never mutates the
//! outline directly: it rewrites the text, and the outline is extracted again from
//! the result. Each operation returns a new snapshot, or `None` when the text would
//! not change, so callers can keep their own history of snapshots.

use crate::config::Config;
use crate::level::change_level_with;
use crate::node::{NodeId, OutlineNode};
use crate::outline::{extract_with, move_subtree, toggle_collapsed};
use crate::reorder::reorder_with;

#[derive(Clone, Debug)]
/// A buffer paired with the outline extracted from it.
pub struct Document {
    text: String,
    outline: Vec<OutlineNode>,
    config: Config,
}

impl Document {
    #[must_use]
    /// Snapshot `text`, extracting its outline.
    pub fn new(text: impl Into<String>, config: Config) -> Self {
        let text = text.into();
        let outline = extract_with(&text, &config);
        Self {
            text,
            outline,
            config,
        }
    }

    #[must_use]
    /// The buffer.
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    /// The outline projected from the buffer.
    pub fn outline(&self) -> &[OutlineNode] {
        &self.outline
    }

    #[must_use]
    /// Snapshot new text, keeping folding state for headings that survive.
    ///
    /// A node stays collapsed if a node with the same `(text, level)` was collapsed
    /// here; collapsed flags are consumed in order so duplicates pair up one to one.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        let mut next = Self::new(text, self.config.clone());
        let mut folded: Vec<&OutlineNode> = self.outline.iter().filter(|n| n.collapsed).collect();

        for node in &mut next.outline {
            if let Some(pos) = folded.iter().position(|f| f.same_heading(&*node)) {
                node.collapsed = true;
                folded.remove(pos);
            }
        }
        next
    }

    /// Flip the folding state of the node with `id`. View state only; the text is untouched.
    pub fn toggle(&mut self, id: &NodeId) -> bool {
        toggle_collapsed(&mut self.outline, id)
    }

    /// Rewrite the buffer to follow `desired`, or `None` if the text would not change.
    #[must_use]
    pub fn reorder(&self, desired: &[OutlineNode]) -> Option<Self> {
        let outcome = reorder_with(&self.text, &self.outline, desired, &self.config);
        self.changed(outcome.text)
    }

    #[must_use]
    /// Drag the node at `from` to position `to`, carrying its descendants.
    ///
    /// `None` when `to` falls inside the dragged block or the text would not change.
    pub fn move_node(&self, from: usize, to: usize) -> Option<Self> {
        self.reorder(&move_subtree(&self.outline, from, to)?)
    }

    #[must_use]
    /// Move the node at `index` to the front of the outline.
    pub fn move_to_top(&self, index: usize) -> Option<Self> {
        self.move_node(index, 0)
    }

    #[must_use]
    /// Move the node at `index` to the end of the outline.
    pub fn move_to_bottom(&self, index: usize) -> Option<Self> {
        self.move_node(index, self.outline.len().checked_sub(1)?)
    }

    #[must_use]
    /// Set the level of the node at `index`, shifting its descendants along with it.
    pub fn set_level(&self, index: usize, level: u8) -> Option<Self> {
        let node = self.outline.get(index)?;
        let text = change_level_with(&self.text, node.line, node.level, level, true, &self.config);
        self.changed(text)
    }

    #[must_use]
    /// Nest the node at `index` one level deeper, with its descendants.
    pub fn indent(&self, index: usize) -> Option<Self> {
        let level = self.outline.get(index)?.level;
        if level >= 6 {
            return None;
        }
        self.set_level(index, level + 1)
    }

    #[must_use]
    /// Lift the node at `index` one level shallower, with its descendants.
    pub fn outdent(&self, index: usize) -> Option<Self> {
        let level = self.outline.get(index)?.level;
        if level <= 1 {
            return None;
        }
        self.set_level(index, level - 1)
    }

    #[must_use]
    /// Index of the closest earlier node at a shallower level.
    pub fn parent(&self, index: usize) -> Option<usize> {
        let level = self.outline.get(index)?.level;
        (0..index).rev().find(|&i| self.outline[i].level < level)
    }

    #[must_use]
    /// Index of the next node at the same level under the same parent.
    pub fn next_sibling(&self, index: usize) -> Option<usize> {
        let level = self.outline.get(index)?.level;

        for i in (index + 1)..self.outline.len() {
            if self.outline[i].level == level {
                return Some(i);
            }
            // Gone up past our parent's children
            if self.outline[i].level < level {
                break;
            }
        }

        None
    }

    #[must_use]
    /// Index of the previous node at the same level under the same parent.
    pub fn prev_sibling(&self, index: usize) -> Option<usize> {
        let level = self.outline.get(index)?.level;

        for i in (0..index).rev() {
            if self.outline[i].level == level {
                return Some(i);
            }
            if self.outline[i].level < level {
                break;
            }
        }

        None
    }

    fn changed(&self, text: String) -> Option<Self> {
        if text == self.text {
            None
        } else {
            Some(self.with_text(text))
        }
    }
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
