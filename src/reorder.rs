//! The reorder plan turns a rearranged outline into a rewritten buffer.
//!
//! An outline list produced by dragging nodes around is a new array, not a new set
//! of line numbers, so nodes are correlated with sections by `(text, level)`. Only
//! the top-level entries of the desired outline place sections; each placed section
//! drags its whole descendant run with it. The preamble always stays first.

use crate::config::Config;
use crate::formats::{split_lines, HeadingScan};
use crate::node::OutlineNode;
use crate::outline::{outline_from_scan, top_level_nodes};
use crate::section::{descendant_end, segment_lines, Section};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Resolved placements for one reorder request, in output order.
pub struct ReorderPlan {
    /// Section runs to emit, in the order the desired outline lists them.
    pub placements: Vec<Placement>,
    /// Top-level entries that matched no unconsumed section.
    pub skipped: Vec<Skipped>,
    /// Indices of heading sections no placement consumed, in document order.
    pub leftovers: Vec<usize>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// A matched section and the part of its descendant run not already placed.
pub struct Placement {
    /// Heading label used to match.
    pub heading: String,
    /// Heading level used to match.
    pub level: u8,
    /// Section indices to emit, the matched section first.
    pub sections: Vec<usize>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// A requested entry that could not be placed.
pub struct Skipped {
    /// Requested heading label.
    pub text: String,
    /// Requested heading level.
    pub level: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Result of a reorder: the new buffer and whether any entry was placed.
pub struct ReorderOutcome {
    /// The rewritten buffer, identical to the input when nothing was placed.
    pub text: String,
    /// False when no top-level entry matched a section.
    pub reordered: bool,
}

impl ReorderPlan {
    #[must_use]
    /// Match the top-level entries of `desired` against `sections`.
    ///
    /// Matching is first unconsumed section in document order with equal heading
    /// and level. A match consumes the unconsumed part of its descendant run too.
    pub fn resolve(sections: &[Section], desired: &[OutlineNode]) -> Self {
        let mut consumed = vec![false; sections.len()];
        let mut plan = Self::default();

        for entry in top_level_nodes(desired) {
            let found = sections.iter().enumerate().position(|(i, s)| {
                !consumed[i]
                    && !s.is_preamble()
                    && s.level == entry.level
                    && s.heading == entry.text
            });

            let Some(start) = found else {
                tracing::warn!(text = %entry.text, level = entry.level, "no section matches outline entry");
                plan.skipped.push(Skipped {
                    text: entry.text.clone(),
                    level: entry.level,
                });
                continue;
            };

            // A descendant may already have been placed on its own
            let run: Vec<usize> = (start..descendant_end(sections, start))
                .filter(|&i| !consumed[i])
                .collect();
            for &i in &run {
                consumed[i] = true;
            }
            plan.placements.push(Placement {
                heading: entry.text.clone(),
                level: entry.level,
                sections: run,
            });
        }

        plan.leftovers = sections
            .iter()
            .enumerate()
            .filter(|(i, s)| !consumed[*i] && !s.is_preamble())
            .map(|(i, _)| i)
            .collect();

        plan
    }

    #[must_use]
    /// Whether no entry was placed, making the request a no-op.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    #[must_use]
    /// Assemble the output lines: preamble, placed runs, then any leftovers.
    pub fn apply(&self, sections: &[Section]) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(preamble) = sections.first().filter(|s| s.is_preamble()) {
            lines.extend(preamble.content.iter().cloned());
        }

        for placement in &self.placements {
            for &index in &placement.sections {
                lines.extend(sections[index].content.iter().cloned());
            }
        }

        if !self.leftovers.is_empty() {
            tracing::warn!(count = self.leftovers.len(), "appending sections the outline did not place");
        }
        for &index in &self.leftovers {
            lines.extend(sections[index].content.iter().cloned());
        }

        lines
    }
}

#[must_use]
/// Rewrite `text` so its heading order follows `new_outline`.
///
/// `old_outline` is the outline the caller believes `text` has; a mismatch is
/// logged but does not change the result, which depends only on `text` and
/// `new_outline`.
pub fn reorder_with(
    text: &str,
    old_outline: &[OutlineNode],
    new_outline: &[OutlineNode],
    config: &Config,
) -> ReorderOutcome {
    let unchanged = || ReorderOutcome {
        text: text.to_string(),
        reordered: false,
    };

    let lines = split_lines(text);
    let scan = HeadingScan::new(&lines, config);

    let current = outline_from_scan(&scan);
    let stale = current.len() != old_outline.len()
        || current.iter().zip(old_outline).any(|(a, b)| !a.same_heading(b));
    if stale {
        tracing::warn!("outline passed as current does not match the buffer");
    }

    let sections = segment_lines(&lines, &scan);
    if sections.iter().all(Section::is_preamble) {
        tracing::warn!("no headings to reorder");
        return unchanged();
    }

    let plan = ReorderPlan::resolve(&sections, new_outline);
    if plan.is_empty() {
        tracing::warn!("no outline entry matched a section, leaving text unchanged");
        return unchanged();
    }

    tracing::debug!(
        placed = plan.placements.len(),
        skipped = plan.skipped.len(),
        "reordered sections"
    );

    ReorderOutcome {
        text: plan.apply(&sections).join("\n"),
        reordered: true,
    }
}

#[must_use]
/// Rewrite `text` to follow `new_outline` using the default configuration.
pub fn reorder(text: &str, old_outline: &[OutlineNode], new_outline: &[OutlineNode]) -> String {
    reorder_with(text, old_outline, new_outline, &Config::default()).text
}

#[cfg(test)]
#[path = "tests/reorder.rs"]
mod tests;
