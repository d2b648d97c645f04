// SPDX-License-Identifier: PMPL-1.0-or-later

//! Prompt rendering for the console session

use crate::i18n;
use colored::*;
use std::io::{self, Write};

pub struct PromptFormatter {
    show_language_names: bool,
}

impl PromptFormatter {
    pub fn new(show_language_names: bool) -> Self {
        Self {
            show_language_names,
        }
    }

    pub fn countries<W: Write>(&self, out: &mut W, countries: &[String]) -> io::Result<()> {
        writeln!(out, "{}", "Available countries:".bold())?;
        for country in countries {
            writeln!(out, "{}", country)?;
        }
        writeln!(out, "Select a country (or type 'quit' to exit):")
    }

    pub fn languages<W: Write>(&self, out: &mut W, codes: Vec<String>) -> io::Result<()> {
        writeln!(out, "{}", "Available languages:".bold())?;
        if self.show_language_names {
            for entry in i18n::display_languages(codes) {
                writeln!(out, "{}", entry)?;
            }
        } else {
            for code in i18n::sorted_codes(codes) {
                writeln!(out, "{}", code)?;
            }
        }
        writeln!(out, "Select a language from above (or type 'quit' to exit):")
    }

    pub fn translation<W: Write>(
        &self,
        out: &mut W,
        country: &str,
        language: &str,
        translation: &str,
    ) -> io::Result<()> {
        writeln!(out, "{} in {} is {}", country, language, translation)?;
        writeln!(out, "Press enter to continue or quit to exit.")
    }

    pub fn farewell<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", "Goodbye!".green())
    }
}
