use std::path::PathBuf;

use hindo_core::{DictionaryId, FrequencyProvider, MetaStore};
use serde_json::json;

use crate::processor::FrequencyLookup;

fn dictionary(title: &str, rows: serde_json::Value) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("index.json"),
        json!({"title": title, "revision": "1"}).to_string(),
    )
    .unwrap();
    std::fs::write(dir.path().join("term_meta_bank_1.json"), rows.to_string()).unwrap();
    dir
}

#[test]
fn test_frequencies_across_dictionaries() {
    let jpdb = dictionary(
        "JPDB",
        json!([
            ["生", "freq", {"reading": "なま", "frequency": {"value": 12000, "displayValue": "Frequent"}}],
            ["生", "freq", {"reading": "せい", "frequency": 3500}]
        ]),
    );
    let corpus = dictionary("Corpus", json!([["生", "freq", "very common"], ["生", "freq", {}]]));

    let paths = vec![
        jpdb.path().to_path_buf(),
        PathBuf::from("/definitely/not/a/dictionary"),
        corpus.path().to_path_buf(),
    ];
    let lookup = FrequencyLookup::with_dictionaries(&paths);
    assert_eq!(lookup.store().dictionaries().len(), 2);

    let observations = lookup.frequencies("生");
    let summary: Vec<(&str, &str, Option<i64>, &str)> = observations
        .iter()
        .map(|o| {
            (
                o.reading.as_str(),
                o.display_text.as_str(),
                o.rank,
                o.source_dictionary_id.as_str(),
            )
        })
        .collect();

    assert_eq!(
        summary,
        vec![
            ("せい", "3500", Some(3500), "JPDB"),
            ("なま", "Frequent", Some(12000), "JPDB"),
            ("", "very common", None, "Corpus"),
        ]
    );
    assert_eq!(lookup.best_rank("生"), Some(3500));
}

#[test]
fn test_lookup_normalizes_term() {
    let dir = dictionary("JPDB", json!([["タベル", "freq", 40]]));
    let lookup = FrequencyLookup::with_dictionaries(&[dir.path().to_path_buf()]);

    assert_eq!(lookup.frequencies(" ﾀﾍﾞﾙ ").len(), 1);
    assert!(lookup.frequencies("   ").is_empty());
}

#[test]
fn test_disabled_dictionary_not_resolved() {
    let dir = dictionary("JPDB", json!([["水", "freq", 820]]));
    let mut lookup = FrequencyLookup::with_dictionaries(&[dir.path().to_path_buf()]);

    lookup
        .store_mut()
        .set_enabled(&DictionaryId::from("JPDB"), false)
        .unwrap();
    assert!(lookup.frequencies("水").is_empty());
    assert_eq!(lookup.best_rank("水"), None);
}

#[test]
fn test_width_variant_expressions_are_reachable() {
    let dir = dictionary("JPDB", json!([["ＣＤ", "freq", 40], ["ｶﾞｯｺｳ", "freq", 50]]));
    let lookup = FrequencyLookup::with_dictionaries(&[dir.path().to_path_buf()]);

    // exact stored text
    assert_eq!(lookup.frequencies("ＣＤ").len(), 1);
    assert_eq!(lookup.frequencies("ｶﾞｯｺｳ").len(), 1);
    // folded forms
    assert_eq!(lookup.best_rank("CD"), Some(40));
    assert_eq!(lookup.best_rank("ガッコウ"), Some(50));
}
