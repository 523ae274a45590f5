//! Error type shared by table construction and lookups.

/// Errors produced while building the tables or answering a query.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A syllable appeared more than once in the frequency source.
    #[error("duplicate syllable in frequency table: {syllable:?}")]
    DuplicateKey {
        /// The repeated syllable.
        syllable: String,
    },

    /// The syllable has no attested characters in the index.
    #[error("no characters recorded for syllable {syllable:?}")]
    NotFound {
        /// The syllable that was looked up.
        syllable: String,
    },

    /// The input is longer than the configured cap.
    #[error("input is {len} characters long, the limit is {max}")]
    InputTooLong {
        /// Length of the rejected input, in characters.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A row in a source table could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number in the source text.
        line: usize,
        /// What was wrong with the row.
        message: String,
    },

    /// Reading a source table failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// `is_recoverable` reports whether the error belongs to a single query rather than to
    /// table construction. Recoverable errors should be shown as an empty result.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::InputTooLong { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
