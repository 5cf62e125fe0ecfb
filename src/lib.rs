//! trellis: outline extraction and structural rewriting for heading-structured text.
//!
//! The buffer is the only source of truth. [`extract_outline`] projects it into a
//! flat list of [`OutlineNode`]s; [`reorder_by_outline`] and [`change_heading_level`]
//! turn a structurally edited outline back into text. All operations are pure and
//! never fail: requests that cannot be honoured leave the text unchanged.

pub mod config;
pub mod document;
pub mod error;
pub mod formats;
pub mod level;
pub mod node;
pub mod outline;
pub mod reorder;
pub mod section;

pub use config::Config;
pub use document::Document;
pub use error::{Result, TrellisError};
pub use formats::DetectionMode;
pub use node::{NodeId, OutlineNode};
pub use reorder::{ReorderOutcome, ReorderPlan};
pub use section::Section;

use std::fs;
use std::path::Path;

#[must_use]
/// Extract the outline of `text`.
pub fn extract_outline(text: &str) -> Vec<OutlineNode> {
    outline::extract(text)
}

#[must_use]
/// Partition `text` into sections whose contents concatenate back to `text`.
pub fn segment_sections(text: &str) -> Vec<Section> {
    section::segment(text)
}

#[must_use]
/// Rewrite `text` so its sections follow the top-level order of `new_outline`.
pub fn reorder_by_outline(
    text: &str,
    old_outline: &[OutlineNode],
    new_outline: &[OutlineNode],
) -> String {
    reorder::reorder(text, old_outline, new_outline)
}

#[must_use]
/// Change the level of the heading on `line_number`, optionally with its descendants.
pub fn change_heading_level(
    text: &str,
    line_number: usize,
    old_level: u8,
    new_level: u8,
    include_descendants: bool,
) -> String {
    level::change_level(text, line_number, old_level, new_level, include_descendants)
}

#[derive(Clone, Debug, Default)]
/// The four operations bound to one configuration.
pub struct Engine {
    config: Config,
}

impl Engine {
    #[must_use]
    /// Engine using `config` for heading detection.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    /// See [`extract_outline`].
    pub fn extract_outline(&self, text: &str) -> Vec<OutlineNode> {
        outline::extract_with(text, &self.config)
    }

    #[must_use]
    /// See [`segment_sections`].
    pub fn segment_sections(&self, text: &str) -> Vec<Section> {
        section::segment_with(text, &self.config)
    }

    #[must_use]
    /// See [`reorder_by_outline`]; the outcome also reports whether anything was placed.
    pub fn reorder_by_outline(
        &self,
        text: &str,
        old_outline: &[OutlineNode],
        new_outline: &[OutlineNode],
    ) -> ReorderOutcome {
        reorder::reorder_with(text, old_outline, new_outline, &self.config)
    }

    #[must_use]
    /// See [`change_heading_level`].
    pub fn change_heading_level(
        &self,
        text: &str,
        line_number: usize,
        old_level: u8,
        new_level: u8,
        include_descendants: bool,
    ) -> String {
        level::change_level_with(
            text,
            line_number,
            old_level,
            new_level,
            include_descendants,
            &self.config,
        )
    }

    #[must_use]
    /// Lines of the section starting on `heading_line`, with its descendants.
    pub fn section_content(&self, text: &str, heading_line: usize) -> Vec<String> {
        section::section_content(text, heading_line, &self.config)
    }

    #[must_use]
    /// Snapshot `text` as a [`Document`] under this engine's configuration.
    pub fn document(&self, text: impl Into<String>) -> Document {
        Document::new(text, self.config.clone())
    }

    /// Read a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn open(&self, path: &Path) -> Result<Document> {
        let text = fs::read_to_string(path).map_err(|e| TrellisError::io(path, e))?;
        Ok(self.document(text))
    }
}

/// Parse an outline list from JSON, as produced by `outline --json`.
///
/// # Errors
///
/// Returns an error if the JSON is not a list of outline nodes.
pub fn outline_from_json(json: &str) -> Result<Vec<OutlineNode>> {
    Ok(serde_json::from_str(json)?)
}

/// Write `text` to `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|e| TrellisError::io(path, e))
}

#[cfg(test)]
#[path = "tests/properties.rs"]
mod properties;
