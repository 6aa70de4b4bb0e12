use hindo_core::{DictionaryId, DictionaryInfo, MetaKind, MetaStore, RawMetaRecord, StoreError};

use crate::dictionary::MetaIndex;

fn info(title: &str) -> DictionaryInfo {
    DictionaryInfo {
        id: title.into(),
        title: title.to_string(),
        revision: "1".to_string(),
        enabled: true,
    }
}

fn row(dictionary: &str, expression: &str, payload: &str) -> RawMetaRecord {
    RawMetaRecord::new(dictionary, expression, MetaKind::Frequency, payload)
}

fn index_with(titles: &[&str]) -> MetaIndex {
    let mut index = MetaIndex::new();
    for title in titles {
        index.add_dictionary(info(title)).unwrap();
    }
    index
}

#[test]
fn test_insert_and_lookup() {
    let mut index = index_with(&["JPDB"]);
    let inserted = index
        .insert_meta(vec![row("JPDB", "生", "100"), row("JPDB", "水", "200")])
        .unwrap();

    assert_eq!(inserted, 2);
    assert_eq!(index.record_count(), 2);
    assert_eq!(index.meta_for("生"), vec![row("JPDB", "生", "100")]);
    assert!(index.meta_for("火").is_empty());
}

#[test]
fn test_duplicate_dictionary_rejected() {
    let mut index = index_with(&["JPDB"]);
    let err = index.add_dictionary(info("JPDB")).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateDictionary(id) if id.as_str() == "JPDB"));
}

#[test]
fn test_insert_for_unknown_dictionary_leaves_store_untouched() {
    let mut index = index_with(&["JPDB"]);
    let err = index
        .insert_meta(vec![row("JPDB", "生", "1"), row("Missing", "生", "2")])
        .unwrap_err();

    assert!(matches!(err, StoreError::UnknownDictionary(id) if id.as_str() == "Missing"));
    assert_eq!(index.record_count(), 0);
    assert!(index.meta_for("生").is_empty());
}

#[test]
fn test_lookup_follows_dictionary_order() {
    let mut index = index_with(&["First", "Second"]);
    index.insert_meta(vec![row("Second", "生", "2")]).unwrap();
    index.insert_meta(vec![row("First", "生", "1")]).unwrap();

    let sources: Vec<String> = index
        .meta_for("生")
        .into_iter()
        .map(|r| r.dictionary_id.to_string())
        .collect();
    assert_eq!(sources, vec!["First", "Second"]);
}

#[test]
fn test_disabled_dictionaries_skipped() {
    let mut index = index_with(&["A", "B"]);
    index
        .insert_meta(vec![row("A", "生", "1"), row("B", "生", "2")])
        .unwrap();

    index.set_enabled(&DictionaryId::from("A"), false).unwrap();
    let rows = index.meta_for("生");
    assert_eq!(rows, vec![row("B", "生", "2")]);

    index.set_enabled(&DictionaryId::from("A"), true).unwrap();
    assert_eq!(index.meta_for("生").len(), 2);
}

#[test]
fn test_set_enabled_unknown() {
    let mut index = MetaIndex::new();
    assert!(index.set_enabled(&DictionaryId::from("nope"), false).is_err());
}

#[test]
fn test_delete_dictionary_removes_rows_and_reindexes() {
    let mut index = index_with(&["A", "B"]);
    index
        .insert_meta(vec![
            row("A", "生", "1"),
            row("B", "生", "2"),
            row("A", "水", "3"),
            row("B", "水", "4"),
        ])
        .unwrap();

    let removed = index.delete_dictionary(&DictionaryId::from("A")).unwrap();
    assert_eq!(removed, 2);
    assert_eq!(index.record_count(), 2);
    assert_eq!(index.meta_for("生"), vec![row("B", "生", "2")]);
    assert_eq!(index.meta_for("水"), vec![row("B", "水", "4")]);
    assert_eq!(index.dictionaries(), vec![info("B")]);

    assert!(index.delete_dictionary(&DictionaryId::from("A")).is_err());
}

#[test]
fn test_lookup_keys_normalized_after_delete() {
    let mut index = index_with(&["A", "B"]);
    index
        .insert_meta(vec![row("A", "ＣＤ", "1"), row("B", "ＣＤ", "2")])
        .unwrap();
    assert_eq!(index.meta_for("CD").len(), 2);

    index.delete_dictionary(&DictionaryId::from("A")).unwrap();
    assert_eq!(index.meta_for("ＣＤ"), vec![row("B", "ＣＤ", "2")]);
    assert_eq!(index.meta_for("CD"), vec![row("B", "ＣＤ", "2")]);
}
