// SPDX-License-Identifier: PMPL-1.0-or-later

//! JSON-backed provider.
//!
//! The data file is an array of flat objects, one per country:
//!
//! ```json
//! [{"country": "can", "de": "Kanada", "en": "Canada", "zh": "加拿大"}]
//! ```
//!
//! `country` is reserved; every other key is a language code mapped to the localised
//! name. The whole file is parsed at construction and never touched again. Any read or
//! parse failure aborts construction, since it means the data was packaged wrong.

use super::TranslationProvider;
use crate::types::{Lookup, COUNTRY_KEY};
use anyhow::{anyhow, bail, Context, Result};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::Value;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::Path;

/// Sample data compiled into the binary.
const EMBEDDED_SAMPLE: &str = include_str!("../../data/sample.json");

/// One record's key/value pairs in document order, repeats included.
struct RecordEntries(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for RecordEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RecordEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a country record object")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<RecordEntries, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, serde_json::Value>()? {
                    entries.push(entry);
                }
                Ok(RecordEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

#[derive(Debug, Clone)]
pub struct JsonProvider {
    order: Vec<String>,
    table: HashMap<String, BTreeMap<String, String>>,
    source: String,
}

impl JsonProvider {
    /// Load translations from a UTF-8 data file on disk. A leading BOM is ignored.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw_bytes = fs::read(path)
            .with_context(|| format!("reading translation data {}", path.display()))?;
        let content = decode(&raw_bytes)
            .ok_or_else(|| anyhow!("translation data {} is not valid UTF-8", path.display()))?;
        Self::parse(&content, path.display().to_string())
            .with_context(|| format!("loading translation data {}", path.display()))
    }

    /// Load translations from an in-memory JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::parse(json, "inline json".to_string())
    }

    /// Load the sample data compiled into the binary.
    pub fn embedded_sample() -> Result<Self> {
        Self::parse(EMBEDDED_SAMPLE, "embedded sample".to_string())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn parse(json: &str, source: String) -> Result<Self> {
        let records: Vec<Box<RawValue>> =
            serde_json::from_str(json).context("translation data must be a JSON array")?;

        let mut order = Vec::with_capacity(records.len());
        let mut table: HashMap<String, BTreeMap<String, String>> = HashMap::new();

        for (index, raw) in records.iter().enumerate() {
            let (country, languages) = parse_record(index, raw)?;

            let code = country.to_lowercase();
            match table.get_mut(&code) {
                Some(existing) => {
                    log::warn!(
                        "duplicate record for country '{}' at index {}; keeping first-seen languages",
                        code,
                        index
                    );
                    for (language, name) in languages {
                        existing.entry(language).or_insert(name);
                    }
                }
                None => {
                    order.push(code.clone());
                    table.insert(code, languages);
                }
            }
        }

        log::info!("loaded {} countries from {}", order.len(), source);
        Ok(Self {
            order,
            table,
            source,
        })
    }
}

/// Split a record into its country code and language table. Every value must be a
/// string and no key may appear twice.
fn parse_record(index: usize, raw: &RawValue) -> Result<(String, BTreeMap<String, String>)> {
    let RecordEntries(entries) = serde_json::from_str::<RecordEntries>(raw.get())
        .with_context(|| format!("record {} is not an object", index))?;

    let mut country = None;
    let mut languages = BTreeMap::new();
    for (key, value) in entries {
        let Value::String(text) = value else {
            bail!("record {} has a non-string value for \"{}\"", index, key);
        };
        if key == COUNTRY_KEY {
            if country.replace(text).is_some() {
                bail!("record {} repeats the \"{}\" field", index, COUNTRY_KEY);
            }
            continue;
        }
        match languages.entry(key) {
            Entry::Occupied(slot) => {
                bail!("record {} repeats language \"{}\"", index, slot.key());
            }
            Entry::Vacant(slot) => {
                slot.insert(text);
            }
        }
    }

    let country =
        country.ok_or_else(|| anyhow!("record {} has no \"{}\" field", index, COUNTRY_KEY))?;
    Ok((country, languages))
}

/// Strict UTF-8, leading BOM stripped.
fn decode(raw_bytes: &[u8]) -> Option<String> {
    let (cow, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(raw_bytes);
    if had_errors {
        return None;
    }
    Some(cow.into_owned())
}

impl TranslationProvider for JsonProvider {
    fn countries(&self) -> Vec<String> {
        self.order.clone()
    }

    fn country_languages(&self, country: &str) -> Vec<String> {
        self.table
            .get(&country.to_lowercase())
            .map(|languages| languages.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn lookup(&self, country: &str, language: &str) -> Lookup<'_> {
        match self.table.get(&country.to_lowercase()) {
            None => Lookup::CountryNotFound,
            Some(languages) => match languages.get(language) {
                Some(name) => Lookup::Found(name),
                None => Lookup::LanguageNotAvailable(language.to_string()),
            },
        }
    }

    fn describe(&self) -> &str {
        &self.source
    }
}
