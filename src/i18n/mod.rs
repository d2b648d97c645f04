// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language display helpers for the console prompts.
//!
//! Providers only know raw language codes. Before listing them, the console resolves
//! each code to an English display name and sorts the list alphabetically by that
//! name. Codes with no known name display as themselves and sort among the names.

mod iso639;

pub use iso639::language_name;

use std::cmp::Ordering;
use std::fmt;

/// A language code paired with its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: String,
    pub name: Option<&'static str>,
}

impl LanguageEntry {
    pub fn new(code: impl Into<String>) -> Self {
        let code = code.into();
        let name = language_name(&code);
        Self { code, name }
    }

    /// The name when known, otherwise the raw code.
    pub fn label(&self) -> &str {
        match self.name {
            Some(name) => name,
            None => &self.code,
        }
    }

    fn sort_key(&self, other: &Self) -> Ordering {
        self.label()
            .to_lowercase()
            .cmp(&other.label().to_lowercase())
            .then_with(|| self.code.cmp(&other.code))
    }
}

impl fmt::Display for LanguageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "{} ({})", name, self.code),
            None => f.write_str(&self.code),
        }
    }
}

/// Resolve display names and sort alphabetically by name, ties broken by code.
pub fn display_languages<I, S>(codes: I) -> Vec<LanguageEntry>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut entries: Vec<LanguageEntry> = codes.into_iter().map(LanguageEntry::new).collect();
    entries.sort_by(|a, b| a.sort_key(b));
    entries
}

/// Raw codes sorted alphabetically, for when display names are turned off.
pub fn sorted_codes<I, S>(codes: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut codes: Vec<String> = codes.into_iter().map(Into::into).collect();
    codes.sort();
    codes
}
