//! Section segmentation: the lossless partition of a buffer into heading-led runs.
//!
//! A section owns its heading line and every following non-heading line up to the
//! next heading. Lines before the first heading form a level-0 preamble. Concatenating
//! the `content` of every section in order reproduces the input line for line, which
//! is what lets the reorder rewriter move sections without inventing or losing text.

use crate::config::Config;
use crate::formats::{split_lines, HeadingScan};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// A contiguous run of lines led by one heading, or the preamble.
pub struct Section {
    /// First line of the section (the heading line), inclusive.
    pub start_line: usize,
    /// Last line of the section, inclusive.
    pub end_line: usize,
    /// 0 for the preamble, otherwise the heading's level.
    pub level: u8,
    /// Heading label, empty for the preamble.
    pub heading: String,
    /// The section's lines verbatim, heading line included.
    pub content: Vec<String>,
}

impl Section {
    fn open(start_line: usize, level: u8, heading: String, first: &str) -> Self {
        Self {
            start_line,
            end_line: start_line,
            level,
            heading,
            content: vec![first.to_string()],
        }
    }

    fn push(&mut self, line: &str) {
        self.content.push(line.to_string());
        self.end_line = self.start_line + self.content.len() - 1;
    }

    #[must_use]
    /// Whether this is the content before the first heading.
    pub fn is_preamble(&self) -> bool {
        self.level == 0
    }
}

#[must_use]
/// Partition `text` into sections using the default configuration.
pub fn segment(text: &str) -> Vec<Section> {
    segment_with(text, &Config::default())
}

#[must_use]
/// Partition `text` into sections.
pub fn segment_with(text: &str, config: &Config) -> Vec<Section> {
    let lines = split_lines(text);
    let scan = HeadingScan::new(&lines, config);
    segment_lines(&lines, &scan)
}

/// Partition already-classified lines into sections.
pub(crate) fn segment_lines(lines: &[&str], scan: &HeadingScan) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;

    for (index, line) in lines.iter().enumerate() {
        if let Some(heading) = scan.heading(index) {
            if let Some(done) = current.take() {
                sections.push(done);
            }
            current = Some(Section::open(index, heading.level, heading.text.clone(), line));
        } else if let Some(section) = current.as_mut() {
            section.push(line);
        } else {
            current = Some(Section::open(index, 0, String::new(), line));
        }
    }

    if let Some(done) = current {
        sections.push(done);
    }

    sections
}

#[must_use]
/// End (exclusive) of the descendant run of `sections[index]`.
///
/// The run is every following section strictly deeper than `sections[index]`,
/// stopping at the first one at the same or a shallower level.
pub fn descendant_end(sections: &[Section], index: usize) -> usize {
    let Some(section) = sections.get(index) else {
        return index;
    };

    sections[index + 1..]
        .iter()
        .position(|s| s.level <= section.level)
        .map_or(sections.len(), |offset| index + 1 + offset)
}

#[must_use]
/// The section starting on `heading_line` together with its descendants, as lines.
///
/// Empty if no section starts on that line.
pub fn section_content(text: &str, heading_line: usize, config: &Config) -> Vec<String> {
    let sections = segment_with(text, config);
    let Some(index) = sections
        .iter()
        .position(|s| !s.is_preamble() && s.start_line == heading_line)
    else {
        return Vec::new();
    };

    sections[index..descendant_end(&sections, index)]
        .iter()
        .flat_map(|s| s.content.iter().cloned())
        .collect()
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
