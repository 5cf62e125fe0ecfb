//! Heading level changes (indent and outdent) as in-place line substitution.
//!
//! Only `#`-marked headings carry a rewritable depth, so keyword-detected headings
//! are never touched. Line count and line order are always preserved.

use crate::config::Config;
use crate::formats::markdown::MarkdownSyntax;
use crate::formats::{split_lines, DetectionMode, HeadingScan};

#[must_use]
/// Change the level of the heading on `line_number` using the default configuration.
pub fn change_level(
    text: &str,
    line_number: usize,
    old_level: u8,
    new_level: u8,
    include_descendants: bool,
) -> String {
    change_level_with(
        text,
        line_number,
        old_level,
        new_level,
        include_descendants,
        &Config::default(),
    )
}

#[must_use]
/// Change the level of the heading on `line_number`.
///
/// Without `include_descendants`, only that heading's marker is rewritten to
/// `new_level`. With it, the heading and every following heading deeper than
/// `old_level` are shifted by `new_level - old_level`; the walk stops at the
/// first heading at or above `old_level`. Resulting levels are clamped into 1..=6.
/// A target line that is not a `#`-marked heading makes this a no-op.
pub fn change_level_with(
    text: &str,
    line_number: usize,
    old_level: u8,
    new_level: u8,
    include_descendants: bool,
    config: &Config,
) -> String {
    let lines = split_lines(text);
    let scan = HeadingScan::new(&lines, config);

    if scan.mode != DetectionMode::Markdown || scan.heading(line_number).is_none() {
        tracing::warn!(line = line_number, "level change target is not a marked heading");
        return text.to_string();
    }

    let mut rewritten: Vec<String> = lines.iter().map(|line| (*line).to_string()).collect();

    if !include_descendants {
        if let Some(marked) = MarkdownSyntax::split(lines[line_number]) {
            rewritten[line_number] = MarkdownSyntax::render(new_level, marked.rest);
        }
        return rewritten.join("\n");
    }

    let delta = i16::from(new_level) - i16::from(old_level);
    for (index, line) in lines.iter().enumerate().skip(line_number) {
        if scan.heading(index).is_none() {
            continue;
        }
        let Some(marked) = MarkdownSyntax::split(line) else {
            continue;
        };
        if index > line_number && marked.level <= old_level {
            break;
        }
        rewritten[index] = MarkdownSyntax::render(shift(marked.level, delta), marked.rest);
    }

    rewritten.join("\n")
}

/// Shift a level by `delta`, clamped into 1..=6.
fn shift(level: u8, delta: i16) -> u8 {
    let shifted = (i16::from(level) + delta).clamp(1, 6);
    u8::try_from(shifted).unwrap_or(6)
}

#[cfg(test)]
#[path = "tests/level.rs"]
mod tests;
