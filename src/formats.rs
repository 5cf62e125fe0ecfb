//! Heading syntaxes and the document classification pass.
//!
//! A buffer is classified exactly once: if any line carries the marker-prefixed
//! markdown syntax, the whole document is read in [`DetectionMode::Markdown`],
//! otherwise every line is tested against the keyword patterns of
//! [`DetectionMode::Keyword`]. Extraction, segmentation and level rewriting all
//! consume the same [`HeadingScan`], so they can never disagree about which lines
//! are headings.

pub mod heuristic;
pub mod markdown;

use crate::config::Config;
use heuristic::KeywordSyntax;
use markdown::MarkdownSyntax;

/// A line recognised as a heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    /// Nesting depth, 1 to 6.
    pub level: u8,
    /// Label with markers and surrounding whitespace removed.
    pub text: String,
}

/// One stage of heading detection.
pub trait HeadingSyntax {
    /// Decide whether a single line is a heading under this syntax.
    fn detect(&self, line: &str) -> Option<Heading>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which syntax governs a whole document.
pub enum DetectionMode {
    /// At least one `#`-prefixed heading exists; nothing else counts.
    Markdown,
    /// No `#`-prefixed heading exists; keyword labels such as "Chapter 1" count.
    Keyword,
}

/// Per-line heading detection for one buffer, under one [`DetectionMode`].
pub struct HeadingScan {
    /// The mode chosen for the whole document.
    pub mode: DetectionMode,
    /// One entry per input line, `Some` for heading lines.
    pub headings: Vec<Option<Heading>>,
}

impl HeadingScan {
    #[must_use]
    /// Classify `lines` and detect every heading under the chosen mode.
    pub fn new(lines: &[&str], config: &Config) -> Self {
        let fenced = fenced_lines(lines, config.skip_fenced_code);
        let mode = classify(lines, &fenced);

        let keyword = KeywordSyntax::new(config.max_heading_chars);
        let syntax: &dyn HeadingSyntax = match mode {
            DetectionMode::Markdown => &MarkdownSyntax,
            DetectionMode::Keyword => &keyword,
        };

        let headings = lines
            .iter()
            .zip(&fenced)
            .map(|(line, &in_fence)| if in_fence { None } else { syntax.detect(line) })
            .collect::<Vec<_>>();

        tracing::debug!(
            ?mode,
            lines = lines.len(),
            headings = headings.iter().flatten().count(),
            "classified document"
        );

        Self { mode, headings }
    }

    #[must_use]
    /// Heading detected on line `index`, if any.
    pub fn heading(&self, index: usize) -> Option<&Heading> {
        self.headings.get(index).and_then(Option::as_ref)
    }
}

/// Choose the detection mode for a whole document.
fn classify(lines: &[&str], fenced: &[bool]) -> DetectionMode {
    let has_markdown = lines
        .iter()
        .zip(fenced)
        .any(|(line, &in_fence)| !in_fence && MarkdownSyntax::matches(line));

    if has_markdown {
        DetectionMode::Markdown
    } else {
        DetectionMode::Keyword
    }
}

/// Mark lines belonging to fenced code blocks, fences included.
///
/// Returns all `false` when fence skipping is disabled.
fn fenced_lines(lines: &[&str], skip: bool) -> Vec<bool> {
    if !skip {
        return vec![false; lines.len()];
    }

    let mut in_fence = false;
    lines
        .iter()
        .map(|line| {
            let trimmed = line.trim_start();
            if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
                in_fence = !in_fence;
                return true;
            }
            in_fence
        })
        .collect()
}

/// Split a buffer into lines on `\n`, keeping a trailing empty line.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

#[cfg(test)]
#[path = "tests/formats.rs"]
mod tests;
