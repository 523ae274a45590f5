//! Engine configuration.
//!
//! A `Config` can be built in code or read from TOML:
//!
//! ```
//! use hanzi_spell::{Config, OverflowPolicy};
//!
//! let config = Config::from_toml_str("max_input_len = 6\noverflow = \"truncate\"").unwrap();
//! assert_eq!(config.max_input_len, Some(6));
//! assert_eq!(config.overflow, OverflowPolicy::Truncate);
//! assert_eq!(config.alphabet, "abcdefghijklmnopqrstuvwxyz");
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// The lowercase Latin alphabet used for edits by default.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Default cap on input length, in characters.
pub const DEFAULT_MAX_INPUT_LEN: usize = 10;

/// What to do with input longer than `max_input_len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail the query with `Error::InputTooLong`.
    #[default]
    Reject,
    /// Keep only the first `max_input_len` characters.
    Truncate,
}

/// How the frequency table treats a syllable that appears twice in its source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail construction with `Error::DuplicateKey`.
    #[default]
    Reject,
    /// The later row replaces the earlier one.
    Overwrite,
}

/// Tunables for table construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Symbols used for substitutions and insertions.
    pub alphabet: String,
    /// Longest accepted input, in characters. `None` disables the cap.
    pub max_input_len: Option<usize>,
    /// Behaviour past `max_input_len`.
    pub overflow: OverflowPolicy,
    /// Behaviour on repeated syllables in the frequency source.
    pub duplicates: DuplicatePolicy,
    /// Number of candidates shown by compact surfaces. `None` shows them all.
    pub page_size: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_string(),
            max_input_len: Some(DEFAULT_MAX_INPUT_LEN),
            overflow: OverflowPolicy::default(),
            duplicates: DuplicatePolicy::default(),
            page_size: None,
        }
    }
}

impl Config {
    /// `load_toml` reads a configuration file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid TOML for `Config`.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// `from_toml_str` parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns error if `content` is not valid TOML for `Config`.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// `to_toml_string` serializes the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
