//! Outline nodes: the caller-facing projection of detected headings.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Opaque identifier of a node within one extraction pass.
///
/// Ids are regenerated on every extraction and carry no meaning across calls;
/// correlate nodes with sections by `(text, level)` instead.
pub struct NodeId(Uuid);

impl NodeId {
    #[must_use]
    /// A fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// One detected heading.
pub struct OutlineNode {
    #[serde(default)]
    /// Identifier unique within the extraction that produced it.
    pub id: NodeId,
    /// Nesting depth, 1 being the top.
    pub level: u8,
    /// Heading label without markers, trimmed.
    pub text: String,
    #[serde(default)]
    /// Zero-based index of the source line.
    pub line: usize,
    #[serde(default)]
    /// View-only folding state, never derived from text.
    pub collapsed: bool,
}

impl OutlineNode {
    #[must_use]
    /// Node for a heading found on `line`, with a fresh id.
    pub fn new(level: u8, text: impl Into<String>, line: usize) -> Self {
        Self {
            id: NodeId::generate(),
            level,
            text: text.into(),
            line,
            collapsed: false,
        }
    }

    #[must_use]
    /// Whether this node and `other` share the `(text, level)` correlation key.
    pub fn same_heading(&self, other: &Self) -> bool {
        self.level == other.level && self.text == other.text
    }
}
