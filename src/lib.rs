//! Pinyin syllable correction and character lookup in Rust.
//!
//! A typed syllable is corrected against a table of syllable frequencies, and the corrected
//! syllable is looked up in an index of characters ranked by usage. The correction follows
//! [Peter Norvig's essay](http://norvig.com/spell-correct.html).
//!
//! ```
//! use hanzi_spell::{CharacterRecord, FrequencyTable, Lookup, SyllableIndex};
//!
//! fn main() -> Result<(), hanzi_spell::Error> {
//!     let table = FrequencyTable::from_pairs([("zhong", 100), ("zhang", 5), ("ma", 50)])?;
//!     let index = SyllableIndex::from_records([
//!         CharacterRecord::new(3, '妈', "ma"),
//!         CharacterRecord::new(10, '马', "ma"),
//!         CharacterRecord::new(42, '吗', "ma"),
//!         CharacterRecord::new(15, '中', "zhong"),
//!     ]);
//!
//!     let lookup = Lookup::new(&table, &index);
//!     assert_eq!(lookup.suggest("ma"), vec!['妈', '马', '吗']);
//!     assert_eq!(lookup.suggest("zhog"), vec!['中']);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all, clippy::pedantic, missing_docs)]

pub mod config;
pub mod corrector;
pub mod edits;
pub mod error;
pub mod frequency;
pub mod index;
pub mod loader;
pub mod lookup;

pub use config::{Config, DuplicatePolicy, OverflowPolicy};
pub use corrector::Corrector;
pub use edits::EditGenerator;
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use index::{CharacterRecord, SyllableIndex};
pub use lookup::{Lookup, Suggestion};
