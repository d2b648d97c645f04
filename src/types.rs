// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for country-translator

use std::fmt;

/// The only control command the console recognises.
pub const QUIT_KEYWORD: &str = "quit";

/// Reserved record key holding the country code; every other key is a language code.
pub const COUNTRY_KEY: &str = "country";

/// Returns `true` when a line of user input is the quit keyword (any case, surrounding
/// whitespace ignored).
pub fn is_quit(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(QUIT_KEYWORD)
}

/// Outcome of resolving a (country, language) pair against a provider.
///
/// Both failure cases are ordinary values: the console always has something to print
/// and keeps running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a str),
    CountryNotFound,
    LanguageNotAvailable(String),
}

impl Lookup<'_> {
    pub fn name(&self) -> Option<&str> {
        match self {
            Lookup::Found(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Lookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Found(name) => f.write_str(name),
            Lookup::CountryNotFound => f.write_str("Country not found"),
            Lookup::LanguageNotAvailable(language) => {
                write!(f, "Translation not available for language: {}", language)
            }
        }
    }
}

/// Summary of a finished console session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    /// Completed country + language cycles, whether or not the lookup succeeded.
    pub translations: usize,
}
