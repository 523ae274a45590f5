//! Raw input to ranked character candidates.

use tracing::debug;

use crate::config::{Config, OverflowPolicy};
use crate::corrector::Corrector;
use crate::edits::EditGenerator;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::index::SyllableIndex;

/// The outcome of resolving one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The input after trimming, lowercasing and length capping.
    pub input: String,
    /// The syllable chosen by the corrector.
    pub corrected: String,
    /// Characters read as `corrected`, most common first. Empty if none are recorded.
    pub characters: Vec<char>,
}

/// `Lookup` corrects a typed syllable and lists the characters it can stand for.
///
/// All methods take `&self` and leave the tables untouched, so repeated calls with the same
/// input give the same answer.
#[derive(Debug, Clone)]
pub struct Lookup<'a> {
    corrector: Corrector<'a>,
    index: &'a SyllableIndex,
    config: Config,
}

impl<'a> Lookup<'a> {
    /// `new` creates a lookup with the default configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use hanzi_spell::{CharacterRecord, FrequencyTable, Lookup, SyllableIndex};
    ///
    /// fn main() -> Result<(), hanzi_spell::Error> {
    ///     let table = FrequencyTable::from_pairs([("zhong", 100), ("ma", 50)])?;
    ///     let index = SyllableIndex::from_records([
    ///         CharacterRecord::new(15, '中', "zhong"),
    ///         CharacterRecord::new(3, '妈', "ma"),
    ///     ]);
    ///     let lookup = Lookup::new(&table, &index);
    ///     assert_eq!(lookup.suggest("zhog"), vec!['中']);
    ///     assert!(lookup.suggest("qqqqqq").is_empty());
    ///     Ok(())
    /// }
    /// ```
    #[must_use]
    pub fn new(table: &'a FrequencyTable, index: &'a SyllableIndex) -> Self {
        Self::with_config(table, index, Config::default())
    }

    /// `with_config` creates a lookup whose alphabet, length cap and page size come from
    /// `config`.
    #[must_use]
    pub fn with_config(table: &'a FrequencyTable, index: &'a SyllableIndex, config: Config) -> Self {
        let corrector = Corrector::with_edits(table, EditGenerator::new(&config.alphabet));
        Self {
            corrector,
            index,
            config,
        }
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying corrector.
    #[must_use]
    pub fn corrector(&self) -> &Corrector<'a> {
        &self.corrector
    }

    /// `prepare` trims and lowercases `raw` and applies the input length cap.
    ///
    /// # Errors
    ///
    /// Returns `Error::InputTooLong` if the input exceeds the cap and the overflow policy is
    /// `Reject`.
    pub fn prepare(&self, raw: &str) -> Result<String> {
        let input = raw.trim().to_lowercase();
        let Some(max) = self.config.max_input_len else {
            return Ok(input);
        };

        let len = input.chars().count();
        if len <= max {
            return Ok(input);
        }
        match self.config.overflow {
            OverflowPolicy::Reject => Err(Error::InputTooLong { len, max }),
            OverflowPolicy::Truncate => Ok(input.chars().take(max).collect()),
        }
    }

    /// `resolve` corrects `raw` and looks up the corrected syllable, keeping the intermediate
    /// steps. A syllable with no recorded characters yields an empty `characters` list.
    ///
    /// # Errors
    ///
    /// Returns `Error::InputTooLong` if `prepare` rejects the input.
    pub fn resolve(&self, raw: &str) -> Result<Suggestion> {
        let input = self.prepare(raw)?;
        let corrected = self.corrector.correct(&input);
        let characters = self.index.get(&corrected).to_vec();
        Ok(Suggestion {
            input,
            corrected,
            characters,
        })
    }

    /// `try_suggest` returns the characters for the correction of `raw`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InputTooLong` if `prepare` rejects the input, and `Error::NotFound` if
    /// the corrected syllable has no recorded characters.
    pub fn try_suggest(&self, raw: &str) -> Result<Vec<char>> {
        let input = self.prepare(raw)?;
        let corrected = self.corrector.correct(&input);
        Ok(self.index.characters_for(&corrected)?.to_vec())
    }

    /// `suggest` returns the characters for the correction of `raw`, most common first.
    ///
    /// Recoverable failures give an empty list.
    #[must_use]
    pub fn suggest(&self, raw: &str) -> Vec<char> {
        match self.try_suggest(raw) {
            Ok(characters) => characters,
            Err(err) => {
                debug!(input = raw, %err, "no suggestions");
                Vec::new()
            }
        }
    }

    /// `suggest_page` is `suggest` cut to the configured page size.
    #[must_use]
    pub fn suggest_page(&self, raw: &str) -> Vec<char> {
        let mut characters = self.suggest(raw);
        if let Some(size) = self.config.page_size {
            characters.truncate(size);
        }
        characters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::CharacterRecord;

    fn tables() -> (FrequencyTable, SyllableIndex) {
        let table = FrequencyTable::from_pairs([
            ("zhong", 100),
            ("zhang", 5),
            ("ma", 50),
            ("lve", 2),
        ])
        .unwrap();
        let index = SyllableIndex::from_records([
            CharacterRecord::new(15, '中', "zhong"),
            CharacterRecord::new(58, '重', "zhong"),
            CharacterRecord::new(900, '章', "zhang"),
            CharacterRecord::new(3, '妈', "ma"),
            CharacterRecord::new(10, '马', "ma"),
            CharacterRecord::new(42, '吗', "ma"),
            CharacterRecord::new(6, '么', "ma"),
        ]);
        (table, index)
    }

    #[test]
    fn corrects_then_looks_up() {
        let (table, index) = tables();
        let lookup = Lookup::new(&table, &index);
        assert_eq!(lookup.suggest("zhog"), vec!['中', '重']);
        assert_eq!(lookup.suggest("ma"), vec!['妈', '么', '马', '吗']);
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        let (table, index) = tables();
        let lookup = Lookup::new(&table, &index);
        assert_eq!(lookup.prepare("  ZHONG\n").unwrap(), "zhong");
        assert_eq!(lookup.suggest(" Zhang "), vec!['章']);
    }

    #[test]
    fn uncovered_syllable_is_empty_not_fatal() {
        let (table, index) = tables();
        let lookup = Lookup::new(&table, &index);
        let err = lookup.try_suggest("lve").unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert!(lookup.suggest("lve").is_empty());

        let suggestion = lookup.resolve("lve").unwrap();
        assert_eq!(suggestion.corrected, "lve");
        assert!(suggestion.characters.is_empty());
    }

    #[test]
    fn long_input_rejected_by_default() {
        let (table, index) = tables();
        let lookup = Lookup::new(&table, &index);
        let err = lookup.try_suggest("zhongzhongzhong").unwrap_err();
        assert!(matches!(err, Error::InputTooLong { len: 15, max: 10 }));
        assert!(lookup.suggest("zhongzhongzhong").is_empty());
    }

    #[test]
    fn long_input_truncated_when_configured() {
        let (table, index) = tables();
        let config = Config {
            max_input_len: Some(5),
            overflow: OverflowPolicy::Truncate,
            ..Config::default()
        };
        let lookup = Lookup::with_config(&table, &index, config);
        assert_eq!(lookup.prepare("zhongguo").unwrap(), "zhong");
        assert_eq!(lookup.suggest("zhongguo"), vec!['中', '重']);
    }

    #[test]
    fn cap_can_be_disabled() {
        let (table, index) = tables();
        let config = Config {
            max_input_len: None,
            ..Config::default()
        };
        let lookup = Lookup::with_config(&table, &index, config);
        assert_eq!(lookup.prepare("abcdefghijklmnop").unwrap(), "abcdefghijklmnop");
    }

    #[test]
    fn page_size_limits_candidates() {
        let (table, index) = tables();
        let config = Config {
            page_size: Some(2),
            ..Config::default()
        };
        let lookup = Lookup::with_config(&table, &index, config);
        assert_eq!(lookup.suggest_page("ma"), vec!['妈', '么']);
        assert_eq!(lookup.suggest("ma").len(), 4);
    }

    #[test]
    fn resolve_reports_each_step() {
        let (table, index) = tables();
        let lookup = Lookup::new(&table, &index);
        let suggestion = lookup.resolve(" ZHOG").unwrap();
        assert_eq!(
            suggestion,
            Suggestion {
                input: "zhog".into(),
                corrected: "zhong".into(),
                characters: vec!['中', '重'],
            }
        );
    }

    #[test]
    fn suggest_is_idempotent() {
        let (table, index) = tables();
        let lookup = Lookup::new(&table, &index);
        for input in ["zhog", "ma", "mq", "lve", "", "xyz"] {
            assert_eq!(lookup.suggest(input), lookup.suggest(input));
        }
    }
}
