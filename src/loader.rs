//! Reading the syllable frequency and character ranking tables.
//!
//! Both tables are comma-separated text with a header row:
//!
//! - syllable frequencies: `syllable,count`
//! - character ranking: `frequency_rank,character,pinyin`
//!
//! Pinyin readings may carry tone marks or tone numbers; they are reduced to toneless
//! lowercase syllables before reaching the index.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::config::DuplicatePolicy;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::index::{CharacterRecord, SyllableIndex};

fn syllable_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z]+$").expect("syllable pattern is valid"))
}

/// `strip_tones` removes tone marks and tone numbers from a pinyin reading.
///
/// # Example
///
/// ```
/// use hanzi_spell::loader::strip_tones;
///
/// assert_eq!(strip_tones("zhōng"), "zhong");
/// assert_eq!(strip_tones("Lǜ"), "lu");
/// assert_eq!(strip_tones("ma3"), "ma");
/// ```
#[must_use]
pub fn strip_tones(pinyin: &str) -> String {
    pinyin
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .to_lowercase()
}

/// Splits a row into trimmed, unquoted fields.
fn fields(line: &str) -> Vec<&str> {
    line.split(',')
        .map(|f| f.trim().trim_matches('"').trim())
        .collect()
}

/// Data rows with their 1-based line numbers, skipping the header and blank lines.
fn rows(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.trim_start_matches('\u{feff}')
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .skip(1)
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

fn syllable(line: usize, raw: &str) -> Result<String> {
    let syllable = strip_tones(raw);
    if syllable_pattern().is_match(&syllable) {
        Ok(syllable)
    } else {
        Err(parse_error(line, format!("invalid syllable {raw:?}")))
    }
}

/// `parse_frequencies` reads `syllable,count` rows.
///
/// # Errors
///
/// Returns `Error::Parse` for a row without two fields, with a bad syllable, or with a count
/// that is not a non-negative integer.
pub fn parse_frequencies(text: &str) -> Result<Vec<(String, u32)>> {
    rows(text)
        .map(|(line, row)| {
            let fields = fields(row);
            let (Some(&name), Some(&count)) = (fields.first(), fields.get(1)) else {
                return Err(parse_error(line, "expected `syllable,count`"));
            };
            let count = count
                .parse::<u32>()
                .map_err(|e| parse_error(line, format!("invalid count {count:?}: {e}")))?;
            Ok((syllable(line, name)?, count))
        })
        .collect()
}

/// `parse_characters` reads `frequency_rank,character,pinyin` rows.
///
/// Rows with an empty field are skipped. A pinyin field listing several readings separated by
/// `/` or whitespace produces one record per reading.
///
/// # Errors
///
/// Returns `Error::Parse` for a bad rank, a character field that is not exactly one
/// character, or a reading that is not a syllable.
pub fn parse_characters(text: &str) -> Result<Vec<CharacterRecord>> {
    let mut records = Vec::new();
    for (line, row) in rows(text) {
        let fields = fields(row);
        let (Some(&rank), Some(&character), Some(&pinyin)) =
            (fields.first(), fields.get(1), fields.get(2))
        else {
            debug!(line, "skipping incomplete row");
            continue;
        };
        if rank.is_empty() || character.is_empty() || pinyin.is_empty() {
            debug!(line, "skipping incomplete row");
            continue;
        }

        let rank = rank
            .parse::<u32>()
            .map_err(|e| parse_error(line, format!("invalid rank {rank:?}: {e}")))?;
        let mut chars = character.chars();
        let (Some(character), None) = (chars.next(), chars.next()) else {
            return Err(parse_error(
                line,
                format!("expected a single character, got {character:?}"),
            ));
        };

        for reading in pinyin.split(|c: char| c == '/' || c.is_whitespace()) {
            if reading.is_empty() {
                continue;
            }
            records.push(CharacterRecord::new(rank, character, syllable(line, reading)?));
        }
    }
    Ok(records)
}

/// `load_frequencies` reads a syllable frequency file into a `FrequencyTable`.
///
/// # Errors
///
/// Returns error if the file cannot be read, a row is malformed, or a syllable repeats under
/// `DuplicatePolicy::Reject`.
pub fn load_frequencies<P: AsRef<Path>>(path: P, policy: DuplicatePolicy) -> Result<FrequencyTable> {
    let text = std::fs::read_to_string(path)?;
    FrequencyTable::from_pairs_with(parse_frequencies(&text)?, policy)
}

/// `load_characters` reads a character ranking file into a `SyllableIndex`.
///
/// # Errors
///
/// Returns error if the file cannot be read or a row is malformed.
pub fn load_characters<P: AsRef<Path>>(path: P) -> Result<SyllableIndex> {
    let text = std::fs::read_to_string(path)?;
    Ok(SyllableIndex::from_records(parse_characters(&text)?))
}
