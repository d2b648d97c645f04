// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation providers.
//!
//! A provider owns an immutable country → (language → name) table built once at
//! construction. Two backends exist:
//!
//! - [`StaticTableProvider`]: a hand-authored fixture, no I/O.
//! - [`JsonProvider`]: parsed eagerly from a JSON array of per-country records.
//!
//! Country codes are matched case-insensitively; language codes are matched exactly.

mod json;
mod static_table;

pub use json::JsonProvider;
pub use static_table::StaticTableProvider;

use crate::types::Lookup;

/// Read-only lookup contract shared by every backend.
pub trait TranslationProvider {
    /// Every known country code, in load order, without duplicates.
    fn countries(&self) -> Vec<String>;

    /// Language codes available for `country`. Empty when the country is unknown.
    fn country_languages(&self, country: &str) -> Vec<String>;

    /// Resolve a (country, language) pair. Never fails; misses are [`Lookup`] variants.
    fn lookup(&self, country: &str, language: &str) -> Lookup<'_>;

    /// Short label used in log lines.
    fn describe(&self) -> &str;

    /// Localised country name, or the explanatory message for a miss.
    fn translate(&self, country: &str, language: &str) -> String {
        self.lookup(country, language).to_string()
    }
}
