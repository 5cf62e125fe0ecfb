//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! We look for a trellis.toml, and if present we load detection settings from there.
//! Anything missing or unparseable falls back to the defaults.

use facet::Facet;
use std::fs;
use std::path::Path;

/// Default cap on the length of a keyword-detected heading.
pub const DEFAULT_MAX_HEADING_CHARS: usize = 100;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "trellis.toml";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// Heading detection preferences loaded from trellis.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_MAX_HEADING_CHARS)]
    /// Keyword-labelled lines at least this many characters long are treated as prose.
    pub max_heading_chars: usize,
    #[facet(default = false)]
    /// Ignore heading-like lines inside fenced code blocks.
    pub skip_fenced_code: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_heading_chars: DEFAULT_MAX_HEADING_CHARS,
            skip_fenced_code: false,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from trellis.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents).unwrap_or_else(|| {
                tracing::warn!(path = %path.display(), "ignoring unparseable config");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    #[must_use]
    /// Parse a TOML document, `None` if it does not describe a config.
    pub fn from_toml(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
