// SPDX-License-Identifier: PMPL-1.0-or-later

//! Hand-authored fixture provider.
//!
//! Knows a single country with a fixed set of languages. Used to drive the console
//! against known-good data without touching the filesystem.

use super::TranslationProvider;
use crate::types::Lookup;

const COUNTRY: &str = "can";

/// Sorted by language code.
const TABLE: &[(&str, &str)] = &[
    ("de", "Kanada"),
    ("en", "Canada"),
    ("es", "Canadá"),
    ("zh", "加拿大"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTableProvider;

impl StaticTableProvider {
    pub fn new() -> Self {
        Self
    }

    fn knows(country: &str) -> bool {
        country.eq_ignore_ascii_case(COUNTRY)
    }
}

impl TranslationProvider for StaticTableProvider {
    fn countries(&self) -> Vec<String> {
        vec![COUNTRY.to_string()]
    }

    fn country_languages(&self, country: &str) -> Vec<String> {
        if !Self::knows(country) {
            return Vec::new();
        }
        TABLE.iter().map(|(code, _)| code.to_string()).collect()
    }

    fn lookup(&self, country: &str, language: &str) -> Lookup<'_> {
        if !Self::knows(country) {
            return Lookup::CountryNotFound;
        }
        TABLE
            .iter()
            .find(|(code, _)| *code == language)
            .map(|(_, name)| Lookup::Found(name))
            .unwrap_or_else(|| Lookup::LanguageNotAvailable(language.to_string()))
    }

    fn describe(&self) -> &str {
        "static table"
    }
}
