//! Edit-distance candidate generation.

use std::collections::HashSet;
use std::iter;

use crate::config::DEFAULT_ALPHABET;

/// `EditGenerator` produces every string one or two edits away from an input.
///
/// An edit is a deletion, an adjacent transposition, a substitution or an insertion.
/// Substitutions and insertions draw from the generator's alphabet.
#[derive(Debug, Clone)]
pub struct EditGenerator {
    alphabet: Vec<char>,
}

impl Default for EditGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET)
    }
}

impl EditGenerator {
    /// `new` creates a generator over the characters of `alphabet`. Repeated characters are
    /// ignored.
    #[must_use]
    pub fn new(alphabet: &str) -> Self {
        let mut seen = HashSet::new();
        let alphabet = alphabet.chars().filter(|c| seen.insert(*c)).collect();
        Self { alphabet }
    }

    /// The symbols used for substitutions and insertions.
    #[must_use]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// `edits1` computes all strings that are one edit away from `syllable`.
    ///
    /// # Example
    ///
    /// ```
    /// use hanzi_spell::EditGenerator;
    ///
    /// let edits = EditGenerator::default().edits1("zhog");
    /// assert!(edits.contains("zhong"));
    /// assert!(edits.contains("zho"));
    /// assert!(edits.contains("hzog"));
    /// assert!(!edits.contains("zhang"));
    /// ```
    #[must_use]
    pub fn edits1(&self, syllable: &str) -> HashSet<String> {
        let chars: Vec<char> = syllable.chars().collect();
        let splits = (0..=chars.len())
            .map(|i| chars.split_at(i))
            .collect::<Vec<(&[char], &[char])>>();

        let deletes = splits
            .iter()
            .filter(|(_, r)| !r.is_empty())
            .map(|&(l, r)| l.iter().chain(&r[1..]).collect::<String>());

        let transposes = splits
            .iter()
            .filter(|(_, r)| r.len() > 1)
            .map(|&(l, r)| {
                l.iter()
                    .chain([&r[1], &r[0]])
                    .chain(&r[2..])
                    .collect::<String>()
            });

        let replaces = splits
            .iter()
            .filter(|(_, r)| !r.is_empty())
            .flat_map(|&(l, r)| {
                self.alphabet
                    .iter()
                    .map(move |c| l.iter().chain(iter::once(c)).chain(&r[1..]).collect::<String>())
            });

        let inserts = splits.iter().flat_map(|&(l, r)| {
            self.alphabet
                .iter()
                .map(move |c| l.iter().chain(iter::once(c)).chain(r).collect::<String>())
        });

        deletes
            .chain(transposes)
            .chain(replaces)
            .chain(inserts)
            .collect()
    }

    /// `edits2` computes all strings that are two edits away from `syllable`.
    ///
    /// This is the expensive tier: its size grows with the square of the input length.
    #[must_use]
    pub fn edits2(&self, syllable: &str) -> HashSet<String> {
        self.edits1(syllable)
            .into_iter()
            .flat_map(|e1| self.edits1(&e1))
            .collect()
    }
}
