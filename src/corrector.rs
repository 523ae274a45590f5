//! Syllable spelling correction.
//!
//! The approach follows [Peter Norvig's essay](http://norvig.com/spell-correct.html): prefer
//! the input if it is known, then known syllables one edit away, then two edits away, and
//! among those pick the most frequent.

use std::collections::HashSet;

use tracing::trace;

use crate::edits::EditGenerator;
use crate::frequency::FrequencyTable;

/// `Corrector` turns a possibly mistyped syllable into the most probable known syllable.
#[derive(Debug, Clone)]
pub struct Corrector<'a> {
    table: &'a FrequencyTable,
    edits: EditGenerator,
}

impl<'a> Corrector<'a> {
    /// `new` creates a corrector over `table` using the lowercase Latin alphabet for edits.
    #[must_use]
    pub fn new(table: &'a FrequencyTable) -> Self {
        Self::with_edits(table, EditGenerator::default())
    }

    /// `with_edits` creates a corrector with a user-supplied edit generator.
    #[must_use]
    pub fn with_edits(table: &'a FrequencyTable, edits: EditGenerator) -> Self {
        Self { table, edits }
    }

    /// The frequency table this corrector scores against.
    #[must_use]
    pub fn table(&self) -> &'a FrequencyTable {
        self.table
    }

    /// `correct` computes the most probable spelling correction for `syllable`.
    ///
    /// Ties on frequency go to the lexicographically smallest syllable. Input that is neither
    /// known nor close to anything known comes back unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use hanzi_spell::{Corrector, FrequencyTable};
    ///
    /// fn main() -> Result<(), hanzi_spell::Error> {
    ///     let table = FrequencyTable::from_pairs([("zhong", 100), ("zhang", 5)])?;
    ///     let corrector = Corrector::new(&table);
    ///     assert_eq!(corrector.correct("zhog"), "zhong");
    ///     assert_eq!(corrector.correct("zhang"), "zhang");
    ///     assert_eq!(corrector.correct("xyz"), "xyz");
    ///     Ok(())
    /// }
    /// ```
    #[must_use]
    pub fn correct(&self, syllable: &str) -> String {
        self.candidates(syllable)
            .into_iter()
            .max_by(|a, b| {
                self.score(a)
                    .cmp(&self.score(b))
                    .then_with(|| b.cmp(a))
            })
            // `candidates` is never empty; this only guards the type.
            .unwrap_or_else(|| syllable.to_string())
    }

    /// `candidates` generates possible spelling corrections for `syllable`.
    ///
    /// The first non-empty tier wins: the syllable itself if known, known syllables one edit
    /// away, known syllables two edits away, and finally the syllable itself.
    #[must_use]
    pub fn candidates(&self, syllable: &str) -> HashSet<String> {
        if self.table.contains(syllable) {
            trace!(syllable, "known syllable");
            return HashSet::from([syllable.to_string()]);
        }

        let k1 = self.known(self.edits.edits1(syllable));
        if !k1.is_empty() {
            trace!(syllable, found = k1.len(), "resolved at one edit");
            return k1;
        }

        let k2 = self.known(self.edits.edits2(syllable));
        if !k2.is_empty() {
            trace!(syllable, found = k2.len(), "resolved at two edits");
            return k2;
        }

        trace!(syllable, "no known candidate");
        HashSet::from([syllable.to_string()])
    }

    /// `known` computes the subset of `syllables` that appear in the frequency table.
    #[must_use]
    pub fn known(&self, syllables: impl IntoIterator<Item = String>) -> HashSet<String> {
        syllables
            .into_iter()
            .filter(|s| self.table.contains(s))
            .collect()
    }

    /// Candidates outside the table (only the unchanged fallback) score below every known one.
    fn score(&self, syllable: &str) -> Option<u32> {
        self.table.frequency(syllable)
    }
}
