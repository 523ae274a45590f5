// End-to-end checks: source tables on disk through to ranked characters.

use std::path::PathBuf;

use hanzi_spell::{loader, Config, DuplicatePolicy, Error, FrequencyTable, Lookup, SyllableIndex};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn tables() -> (FrequencyTable, SyllableIndex) {
    let table = loader::load_frequencies(data("syllables.csv"), DuplicatePolicy::Reject).unwrap();
    let index = loader::load_characters(data("characters.csv")).unwrap();
    (table, index)
}

#[test]
fn tables_load_from_disk() {
    let (table, index) = tables();
    assert_eq!(table.len(), 8);
    assert_eq!(table.total(), 18_533);
    assert_eq!(table.frequency("zhong"), Some(1000));
    assert!(index.contains("chong"));
    assert!(!index.contains("lve"));
}

#[test]
fn known_syllables_are_left_alone() {
    let (table, index) = tables();
    let lookup = Lookup::new(&table, &index);
    for (syllable, _) in table.iter() {
        assert_eq!(lookup.corrector().correct(syllable), syllable);
    }
}

#[test]
fn typo_resolves_to_characters() {
    let (table, index) = tables();
    let lookup = Lookup::new(&table, &index);
    assert_eq!(lookup.suggest("zhog"), vec!['中', '重']);
    assert_eq!(lookup.suggest("shii"), vec!['是', '时']);
    assert_eq!(lookup.suggest("mn"), vec!['妈', '马', '吗']);
}

#[test]
fn homophones_are_ranked_and_unique() {
    let (table, index) = tables();
    let lookup = Lookup::new(&table, &index);
    assert_eq!(index.characters_for("ma").unwrap(), ['妈', '马', '吗']);
    assert_eq!(lookup.suggest("ma"), vec!['妈', '马', '吗']);
    assert_eq!(lookup.suggest("de"), vec!['的']);
}

#[test]
fn unrecognised_input_gives_nothing() {
    let (table, index) = tables();
    let lookup = Lookup::new(&table, &index);
    assert_eq!(lookup.corrector().correct("xyz"), "xyz");
    assert!(lookup.suggest("xyz").is_empty());
}

#[test]
fn syllable_without_characters_is_recoverable() {
    let (table, index) = tables();
    let lookup = Lookup::new(&table, &index);
    let err = lookup.try_suggest("lve").unwrap_err();
    assert!(matches!(err, Error::NotFound { ref syllable } if syllable == "lve"));
    assert!(err.is_recoverable());
    assert!(lookup.suggest("lve").is_empty());
}

#[test]
fn duplicate_frequency_rows() {
    let text = "syllable,frequency\nma,5\nde,9\nma,7\n";
    let pairs = loader::parse_frequencies(text).unwrap();

    let err = FrequencyTable::from_pairs(pairs.clone()).unwrap_err();
    assert!(matches!(err, Error::DuplicateKey { .. }));
    assert!(!err.is_recoverable());

    let table = FrequencyTable::from_pairs_with(pairs, DuplicatePolicy::Overwrite).unwrap();
    assert_eq!(table.frequency("ma"), Some(7));
}

#[test]
fn page_size_from_config() {
    let (table, index) = tables();
    let config = Config::from_toml_str("page_size = 2").unwrap();
    let lookup = Lookup::with_config(&table, &index, config);
    assert_eq!(lookup.suggest_page("ma"), vec!['妈', '马']);
}

#[test]
fn repeated_calls_agree() {
    let (table, index) = tables();
    let lookup = Lookup::new(&table, &index);
    for input in ["zhog", "ma", "xyz", "lve", "", "GUO "] {
        assert_eq!(lookup.suggest(input), lookup.suggest(input));
        assert_eq!(lookup.resolve(input).unwrap(), lookup.resolve(input).unwrap());
    }
}
