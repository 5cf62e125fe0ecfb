//! Marker-prefixed (ATX-style) headings: `#` through `######`.
//!
//! This is the primary syntax. It is unambiguous, carries its depth in the
//! marker run, and is the only syntax whose level can be rewritten in place.

use crate::formats::{Heading, HeadingSyntax};
use regex::Regex;
use std::sync::LazyLock;

static ATX_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("heading pattern compiles"));

/// Detects and renders `#`-prefixed headings.
pub struct MarkdownSyntax;

/// A heading line split into its marker depth and the raw text after the separator.
#[derive(Debug, PartialEq, Eq)]
pub struct MarkedLine<'a> {
    /// Number of `#` characters.
    pub level: u8,
    /// Everything after the marker and its whitespace, untrimmed.
    pub rest: &'a str,
}

impl MarkdownSyntax {
    #[must_use]
    /// Whether the line is a `#`-prefixed heading.
    pub fn matches(line: &str) -> bool {
        ATX_HEADING.is_match(line)
    }

    #[must_use]
    /// Split a heading line into its marker depth and remaining text.
    pub fn split(line: &str) -> Option<MarkedLine<'_>> {
        let caps = ATX_HEADING.captures(line)?;
        let level = u8::try_from(caps.get(1)?.as_str().len()).ok()?;
        let rest = caps.get(2)?.as_str();
        Some(MarkedLine { level, rest })
    }

    #[must_use]
    /// Render a heading line at `level`, clamped into 1..=6.
    pub fn render(level: u8, rest: &str) -> String {
        let level = level.clamp(1, 6);
        format!("{} {rest}", "#".repeat(usize::from(level)))
    }
}

impl HeadingSyntax for MarkdownSyntax {
    fn detect(&self, line: &str) -> Option<Heading> {
        let marked = Self::split(line)?;
        Some(Heading {
            level: marked.level,
            text: marked.rest.trim().to_string(),
        })
    }
}
