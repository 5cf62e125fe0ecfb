//! Keyword-labelled headings for documents with no `#` markers.
//!
//! Prose that happens to start with "Chapter 3" would be a false positive, so a
//! matching line must also be shorter than a configured cap. Patterns are tried
//! in declaration order and the first match decides the level.

use crate::formats::{Heading, HeadingSyntax};
use regex::Regex;
use std::sync::LazyLock;

/// Pattern families and the depth each one implies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    /// Chapters, depth 1.
    Chapter,
    /// Parts, depth 1.
    Part,
    /// Sections, depth 2.
    Section,
    /// Subsections, depth 3.
    Subsection,
}

impl Family {
    #[must_use]
    /// Heading level assigned to lines of this family.
    pub fn level(self) -> u8 {
        match self {
            Self::Chapter | Self::Part => 1,
            Self::Section => 2,
            Self::Subsection => 3,
        }
    }
}

const NUMERAL: &str = r"[一二三四五六七八九十百\d]+";

static PATTERNS: LazyLock<Vec<(Regex, Family)>> = LazyLock::new(|| {
    [
        (format!("^第{NUMERAL}章"), Family::Chapter),
        (format!("^第{NUMERAL}部"), Family::Part),
        (format!("^第{NUMERAL}節"), Family::Section),
        (r"^セクション[\d-]+".to_string(), Family::Section),
        (r"^サブセクション[\d-]+".to_string(), Family::Subsection),
        (r"(?i)^section\s*\d[\d-]*".to_string(), Family::Section),
        (r"(?i)^subsection\s*\d[\d-]*".to_string(), Family::Subsection),
        (r"(?i)^chapter\s*\d[\d-]*".to_string(), Family::Chapter),
        (r"(?i)^part\s*\d[\d-]*".to_string(), Family::Part),
    ]
    .into_iter()
    .map(|(pattern, family)| {
        let regex = Regex::new(&pattern).expect("keyword pattern compiles");
        (regex, family)
    })
    .collect()
});

/// Fallback detector matching labels such as "Chapter 2" or "第三章".
pub struct KeywordSyntax {
    max_chars: usize,
}

impl KeywordSyntax {
    #[must_use]
    /// Detector rejecting candidates of `max_chars` characters or more.
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    #[must_use]
    /// First family whose pattern matches the trimmed line.
    pub fn family(line: &str) -> Option<Family> {
        PATTERNS
            .iter()
            .find(|(regex, _)| regex.is_match(line))
            .map(|(_, family)| *family)
    }
}

impl HeadingSyntax for KeywordSyntax {
    fn detect(&self, line: &str) -> Option<Heading> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.chars().count() >= self.max_chars {
            return None;
        }

        let family = Self::family(trimmed)?;
        Some(Heading {
            level: family.level(),
            text: trimmed.to_string(),
        })
    }
}
