//! End-to-end lookups through the processor with on-disk term banks

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use kotoba_config::dictionary::{ContentShape, DictionaryConfig, EditionConfig};
use kotoba_config::tokenizer::TokenizerConfig;
use kotoba_core::lookup::{LookupResponse, Rejection};
use kotoba_core::types::DictionaryEntry;

use crate::processor::JapaneseProcessor;
use crate::test_utils::sample_tokenizer;

const ENGLISH_BANK: &str = r#"[
    ["猫","ねこ","n","",-200,[{"type":"structured-content","content":[
        {"tag":"ul","data":{"content":"glossary"},"content":[{"tag":"li","content":"cat"}]}
    ]}],1467640,"P"],
    ["好き","すき","adj-na","",0,[{"type":"structured-content","content":
        {"tag":"ul","data":{"content":"glossary"},"content":[
            {"tag":"li","content":"liked"},{"tag":"li","content":"favourite"}
        ]}
    }],1580640,"P"],
    ["食べる","たべる","v1","",0,[{"type":"structured-content","content":[
        {"tag":"ul","data":{"content":"glossary"},"content":[
            {"tag":"li","content":"to eat"},{"tag":"li","content":"meal"}
        ]}
    ]}],1358280,"P"],
    ["食べる","たべる","forms","",0,["食べる","食べます"],1358280,""]
]"#;

const RUSSIAN_BANK: &str = r#"[
    ["猫","ねこ","n","",0,["кошка"],1,""]
]"#;

fn edition(name: &str, file: &str, content: ContentShape, index_readings: bool) -> EditionConfig {
    EditionConfig {
        name: name.to_string(),
        file: file.to_string(),
        content,
        index_readings,
        enabled: true,
    }
}

fn write_banks(dir: &Path) -> DictionaryConfig {
    fs::write(dir.join("english_bank.json"), ENGLISH_BANK).unwrap();

    let russian = dir.join("russian_bank");
    fs::create_dir(&russian).unwrap();
    fs::write(russian.join("term_bank_1.json"), RUSSIAN_BANK).unwrap();

    DictionaryConfig {
        base_path: dir.to_path_buf(),
        editions: vec![
            edition("english", "english_bank", ContentShape::Structured, true),
            edition("missing", "missing_bank", ContentShape::Flat, false),
            edition("russian", "russian_bank", ContentShape::Identity, false),
        ],
    }
}

fn ready_processor(dir: &Path) -> JapaneseProcessor {
    let dictionary = JapaneseProcessor::load_dictionaries(&write_banks(dir));
    JapaneseProcessor::new(Arc::new(sample_tokenizer()), dictionary)
}

fn completed(response: LookupResponse) -> (Vec<DictionaryEntry>, Vec<String>, Vec<String>) {
    match response {
        LookupResponse::Completed {
            status,
            dictionary_result,
            words,
            tokens,
        } => {
            assert_eq!(status, 200);
            assert_eq!(tokens.len(), words.len());
            let surfaces = tokens.into_iter().map(|t| t.surface_form).collect();
            (dictionary_result, words, surfaces)
        }
        other => panic!("expected a completed lookup, got {:?}", other),
    }
}

#[test]
fn test_missing_edition_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let processor = ready_processor(dir.path());
    let names: Vec<_> = processor.dictionary().sources().map(|s| s.name().to_string()).collect();

    assert_eq!(names, vec!["english", "russian"]);
}

#[test]
fn test_sentence_lookup_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let processor = ready_processor(dir.path());

    let (entries, words, surfaces) = completed(processor.lookup("猫が好きです").unwrap());

    assert_eq!(surfaces, vec!["猫", "が", "好き", "です"]);
    assert!(words.contains(&"猫".to_string()));
    assert!(words.contains(&"好き".to_string()));

    // surface, basic form and first character each probe 猫 in both editions
    assert_eq!(entries.len(), 8);
    assert_eq!(entries[0].word, "猫");
    assert_eq!(entries[0].meanings, vec!["cat"]);
    assert_eq!(entries[0].dictionary.as_deref(), Some("english"));
    assert_eq!(entries[1].meanings, vec!["кошка"]);
    assert_eq!(entries[1].dictionary.as_deref(), Some("russian"));
    assert_eq!(entries[2].meanings, vec!["liked", "favourite"]);
}

#[test]
fn test_basic_form_finds_conjugated_verb() {
    let dir = tempfile::tempdir().unwrap();
    let processor = ready_processor(dir.path());

    let (entries, words, _) = completed(processor.lookup("猫が食べます").unwrap());

    assert_eq!(words, vec!["猫", "が", "食べる", "ます"]);
    let verb: Vec<_> = entries.iter().filter(|e| e.word == "食べる").collect();
    assert_eq!(verb.len(), 2);
    assert_eq!(verb[0].meanings, vec!["to eat", "meal"]);
    assert_eq!(verb[1].kind, "forms");
    assert_eq!(verb[1].meanings, vec!["食べる", "食べます"]);
}

#[test]
fn test_no_match_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let processor = ready_processor(dir.path());

    let (entries, words, _) = completed(processor.lookup("犬").unwrap());

    assert_eq!(words, vec!["犬"]);
    assert!(entries.is_empty());
}

#[test]
fn test_repeated_lookup_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let processor = ready_processor(dir.path());

    let first = serde_json::to_vec(&processor.lookup("猫が食べます").unwrap()).unwrap();
    let second = serde_json::to_vec(&processor.lookup("猫が食べます").unwrap()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_empty_sentence_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let processor = ready_processor(dir.path());

    let response = processor.lookup("").unwrap();
    assert_eq!(response, LookupResponse::rejected(Rejection::EmptySentence));
}

#[tokio::test]
async fn test_failed_tokenizer_startup_degrades_to_rejection() {
    let dir = tempfile::tempdir().unwrap();
    let processor = JapaneseProcessor::from_config(&write_banks(dir.path()));
    let config = TokenizerConfig {
        dictionary_path: PathBuf::from("/nonexistent/system.dic"),
        ..TokenizerConfig::default()
    };

    processor.start_tokenizer(config).await.unwrap();

    assert!(!processor.is_ready());
    let response = processor.lookup("猫が好きです").unwrap();
    assert_eq!(response.status(), 400);
    assert_eq!(response, LookupResponse::rejected(Rejection::TokenizerNotReady));
}
