//! Syllable frequency table.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use crate::config::DuplicatePolicy;
use crate::error::{Error, Result};

/// `FrequencyTable` maps a toneless syllable to how often it was observed.
///
/// The table is immutable once built. The sum of all counts is computed at construction.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u32>,
    total: u64,
}

impl FrequencyTable {
    /// `from_pairs` builds a table, rejecting repeated syllables.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateKey` if a syllable occurs more than once.
    ///
    /// # Example
    ///
    /// ```
    /// use hanzi_spell::FrequencyTable;
    ///
    /// fn main() -> Result<(), hanzi_spell::Error> {
    ///     let table = FrequencyTable::from_pairs([("zhong", 100), ("ma", 50)])?;
    ///     assert_eq!(table.frequency("zhong"), Some(100));
    ///     assert_eq!(table.frequency("zhog"), None);
    ///     assert_eq!(table.total(), 150);
    ///     Ok(())
    /// }
    /// ```
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self::from_pairs_with(pairs, DuplicatePolicy::Reject)
    }

    /// `from_pairs_with` builds a table with an explicit policy for repeated syllables.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateKey` if a syllable repeats under `DuplicatePolicy::Reject`.
    pub fn from_pairs_with<I, S>(pairs: I, policy: DuplicatePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut counts = HashMap::new();
        for (syllable, count) in pairs {
            match counts.entry(syllable.into()) {
                Entry::Vacant(slot) => {
                    slot.insert(count);
                }
                Entry::Occupied(mut slot) => match policy {
                    DuplicatePolicy::Reject => {
                        return Err(Error::DuplicateKey {
                            syllable: slot.key().clone(),
                        })
                    }
                    DuplicatePolicy::Overwrite => {
                        slot.insert(count);
                    }
                },
            }
        }

        let total = counts.values().map(|&c| u64::from(c)).sum();
        debug!(syllables = counts.len(), total, "built frequency table");
        Ok(Self { counts, total })
    }

    /// `frequency` returns the count of `syllable`, or `None` if it was never observed.
    #[must_use]
    pub fn frequency(&self, syllable: &str) -> Option<u32> {
        self.counts.get(syllable).copied()
    }

    /// `contains` reports whether `syllable` is a known syllable.
    #[must_use]
    pub fn contains(&self, syllable: &str) -> bool {
        self.counts.contains_key(syllable)
    }

    /// `total` is the sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// `probability` estimates `P(syllable)` as its share of the total count.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn probability(&self, syllable: &str) -> Option<f64> {
        let count = self.frequency(syllable)?;
        if self.total == 0 {
            return Some(0.0);
        }
        Some(f64::from(count) / self.total as f64)
    }

    /// Number of known syllables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table holds no syllables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over `(syllable, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(s, &c)| (s.as_str(), c))
    }
}
