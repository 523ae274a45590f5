//! Toneless syllable to character index.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};

/// One row of the character ranking: a character, how common it is, and one reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    /// Frequency rank; lower is more common.
    pub rank: u32,
    /// The character itself.
    pub character: char,
    /// Toneless reading of the character.
    pub syllable: String,
}

impl CharacterRecord {
    /// Creates a record.
    pub fn new(rank: u32, character: char, syllable: impl Into<String>) -> Self {
        Self {
            rank,
            character,
            syllable: syllable.into(),
        }
    }
}

/// `SyllableIndex` lists, for each toneless syllable, the characters read that way, most
/// common first and without repeats.
#[derive(Debug, Clone, Default)]
pub struct SyllableIndex {
    entries: HashMap<String, Vec<char>>,
}

impl SyllableIndex {
    /// `from_records` groups `records` by syllable.
    ///
    /// Within a syllable, characters are ordered by ascending rank. Records sharing a rank keep
    /// their source order, and a character listed twice keeps its first position.
    ///
    /// # Example
    ///
    /// ```
    /// use hanzi_spell::{CharacterRecord, SyllableIndex};
    ///
    /// let index = SyllableIndex::from_records([
    ///     CharacterRecord::new(42, '吗', "ma"),
    ///     CharacterRecord::new(3, '妈', "ma"),
    ///     CharacterRecord::new(10, '马', "ma"),
    ///     CharacterRecord::new(3, '妈', "ma"),
    /// ]);
    /// assert_eq!(index.get("ma"), ['妈', '马', '吗']);
    /// assert!(index.get("zhong").is_empty());
    /// ```
    pub fn from_records(records: impl IntoIterator<Item = CharacterRecord>) -> Self {
        let mut records: Vec<CharacterRecord> = records.into_iter().collect();
        records.sort_by_key(|r| r.rank);

        let mut entries: HashMap<String, Vec<char>> = HashMap::new();
        for record in records {
            let chars = entries.entry(record.syllable).or_default();
            if !chars.contains(&record.character) {
                chars.push(record.character);
            }
        }

        debug!(syllables = entries.len(), "built syllable index");
        Self { entries }
    }

    /// `characters_for` returns the characters read as `syllable`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no character is recorded for `syllable`.
    pub fn characters_for(&self, syllable: &str) -> Result<&[char]> {
        self.entries
            .get(syllable)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::NotFound {
                syllable: syllable.to_string(),
            })
    }

    /// `get` is `characters_for` with a missing syllable read as an empty list.
    #[must_use]
    pub fn get(&self, syllable: &str) -> &[char] {
        self.entries.get(syllable).map(Vec::as_slice).unwrap_or_default()
    }

    /// Whether any character is recorded for `syllable`.
    #[must_use]
    pub fn contains(&self, syllable: &str) -> bool {
        self.entries.contains_key(syllable)
    }

    /// Number of distinct syllables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The indexed syllables, in no particular order.
    pub fn syllables(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
