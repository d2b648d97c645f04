// SPDX-License-Identifier: PMPL-1.0-or-later

//! Provider behaviour against on-disk data files

use country_translator::provider::{JsonProvider, StaticTableProvider, TranslationProvider};
use country_translator::types::Lookup;
use std::fs;
use tempfile::TempDir;

const CANADA: &str = r#"[{"country":"can","en":"Canada","de":"Kanada"}]"#;

const SEVERAL: &str = r#"[
    {"country": "can", "de": "Kanada", "en": "Canada", "zh": "加拿大"},
    {"country": "USA", "de": "Vereinigte Staaten", "en": "United States"},
    {"country": "fra", "en": "France", "fr": "France", "es": "Francia"},
    {"country": "jpn", "ja": "日本"}
]"#;

fn create_data_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn load(content: &str) -> JsonProvider {
    let dir = TempDir::new().unwrap();
    let path = create_data_file(&dir, "data.json", content);
    JsonProvider::from_path(&path).expect("data file should load")
}

#[test]
fn test_single_record_countries() {
    let provider = load(CANADA);
    assert_eq!(provider.countries(), vec!["can"]);
}

#[test]
fn test_translate_is_case_insensitive_on_country() {
    let provider = load(CANADA);
    assert_eq!(provider.translate("CAN", "en"), "Canada");
    assert_eq!(provider.translate("Can", "de"), "Kanada");
}

#[test]
fn test_unsupported_language_message() {
    let provider = load(CANADA);
    assert_eq!(
        provider.translate("can", "fr"),
        "Translation not available for language: fr"
    );
}

#[test]
fn test_unknown_country_message() {
    let provider = load(CANADA);
    assert_eq!(provider.translate("usa", "en"), "Country not found");
    assert!(provider.country_languages("usa").is_empty());
}

#[test]
fn test_every_stored_pair_round_trips_unchanged() {
    let provider = load(SEVERAL);
    let raw: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(SEVERAL).unwrap();

    for record in &raw {
        let country = record["country"].as_str().unwrap();
        for (language, name) in record.iter().filter(|(k, _)| k.as_str() != "country") {
            assert_eq!(
                provider.lookup(country, language),
                Lookup::Found(name.as_str().unwrap()),
                "{} / {}",
                country,
                language
            );
        }
    }
}

#[test]
fn test_country_case_variants_behave_identically() {
    let provider = load(SEVERAL);
    for country in provider.countries() {
        let upper = country.to_uppercase();
        assert_eq!(
            provider.country_languages(&country),
            provider.country_languages(&upper)
        );
        for language in provider.country_languages(&country) {
            assert_eq!(
                provider.translate(&country, &language),
                provider.translate(&upper, &language)
            );
        }
        assert_eq!(
            provider.translate(&country, "xx"),
            provider.translate(&upper, "xx")
        );
    }
}

#[test]
fn test_countries_in_load_order_without_duplicates() {
    let provider = load(SEVERAL);
    let countries = provider.countries();
    assert_eq!(countries, vec!["can", "usa", "fra", "jpn"]);

    let mut unique = countries.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), countries.len());
}

#[test]
fn test_loading_twice_is_deterministic() {
    let dir = TempDir::new().unwrap();
    let path = create_data_file(&dir, "data.json", SEVERAL);
    let first = JsonProvider::from_path(&path).unwrap();
    let second = JsonProvider::from_path(&path).unwrap();

    assert_eq!(first.countries(), second.countries());
    for country in first.countries() {
        assert_eq!(
            first.country_languages(&country),
            second.country_languages(&country)
        );
        for language in first.country_languages(&country) {
            assert_eq!(
                first.translate(&country, &language),
                second.translate(&country, &language)
            );
        }
    }
}

#[test]
fn test_missing_file_fails_construction() {
    let dir = TempDir::new().unwrap();
    let err = JsonProvider::from_path(&dir.path().join("absent.json")).unwrap_err();
    assert!(format!("{:#}", err).contains("absent.json"));
}

#[test]
fn test_malformed_file_fails_construction() {
    let dir = TempDir::new().unwrap();
    let path = create_data_file(&dir, "broken.json", r#"[{"country": "can", "en": "#);
    assert!(JsonProvider::from_path(&path).is_err());

    let path = create_data_file(&dir, "object.json", r#"{"country": "can"}"#);
    assert!(JsonProvider::from_path(&path).is_err());
}

#[test]
fn test_non_utf8_file_fails_construction() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.json");
    fs::write(&path, b"[{\"country\": \"can\", \"en\": \"Can\xFF\x81da\"}]").unwrap();
    let err = JsonProvider::from_path(&path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("not valid UTF-8"), "unexpected error: {}", message);
    assert!(message.contains("latin1.json"), "unexpected error: {}", message);
}

#[test]
fn test_bom_prefixed_file_loads() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bom.json");
    let mut content = b"\xEF\xBB\xBF".to_vec();
    content.extend_from_slice(CANADA.as_bytes());
    fs::write(&path, content).unwrap();
    let provider = JsonProvider::from_path(&path).unwrap();
    assert_eq!(provider.translate("can", "de"), "Kanada");
}

#[test]
fn test_repeated_language_key_fails_construction() {
    let dir = TempDir::new().unwrap();
    let path = create_data_file(
        &dir,
        "repeated.json",
        r#"[{"country": "can", "en": "Canada", "en": "Dominion"}]"#,
    );
    let err = JsonProvider::from_path(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("repeats language"));
}

#[test]
fn test_providers_share_miss_policy() {
    let providers: Vec<Box<dyn TranslationProvider>> = vec![
        Box::new(StaticTableProvider::new()),
        Box::new(load(CANADA)),
    ];
    for provider in &providers {
        assert_eq!(provider.translate("CAN", "en"), "Canada", "{}", provider.describe());
        assert_eq!(
            provider.translate("can", "fr"),
            "Translation not available for language: fr"
        );
        assert_eq!(provider.translate("usa", "en"), "Country not found");
    }
}
