// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive console session.
//!
//! The driver walks a small state machine:
//!
//! ```text
//! PromptCountry --quit/EOF--> Done
//!     | country
//!     v
//! PromptLanguage --quit/EOF--> Done
//!     | language (prints translation)
//!     v
//! AwaitContinue --quit/EOF--> Done
//!     | anything else
//!     '--> PromptCountry
//! ```
//!
//! Bad country or language codes are not re-prompted: the provider returns its miss
//! message, which is printed like any other translation.

mod formatter;

pub use formatter::PromptFormatter;

use crate::provider::TranslationProvider;
use crate::types::{is_quit, Session};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy)]
pub struct DriverOptions {
    /// List languages as "German (de)" instead of bare codes.
    pub show_language_names: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            show_language_names: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    PromptCountry,
    PromptLanguage { country: String },
    AwaitContinue,
    Done,
}

pub struct Driver<'p, W: Write> {
    provider: &'p dyn TranslationProvider,
    out: W,
    formatter: PromptFormatter,
}

impl<'p, W: Write> Driver<'p, W> {
    pub fn new(provider: &'p dyn TranslationProvider, out: W, options: DriverOptions) -> Self {
        Self {
            provider,
            out,
            formatter: PromptFormatter::new(options.show_language_names),
        }
    }

    /// Run the session until the user quits or input ends.
    ///
    /// `input` is consumed so it is released on every exit path, including I/O errors.
    pub fn run<R: BufRead>(mut self, mut input: R) -> Result<Session> {
        let mut session = Session::default();
        let mut state = State::PromptCountry;

        log::debug!("console session started with {}", self.provider.describe());

        loop {
            state = match state {
                State::PromptCountry => {
                    let countries = self.provider.countries();
                    self.formatter.countries(&mut self.out, &countries)?;
                    match self.read_command(&mut input)? {
                        Some(country) => State::PromptLanguage { country },
                        None => State::Done,
                    }
                }
                State::PromptLanguage { country } => {
                    let languages = self.provider.country_languages(&country);
                    self.formatter.languages(&mut self.out, languages)?;
                    match self.read_command(&mut input)? {
                        Some(language) => {
                            let provider = self.provider;
                            let lookup = provider.lookup(&country, &language);
                            match lookup.name() {
                                Some(name) => {
                                    log::debug!("{} / {} -> {}", country, language, name)
                                }
                                None => {
                                    log::debug!("{} / {} missed: {}", country, language, lookup)
                                }
                            }
                            let translation = lookup.to_string();
                            self.formatter
                                .translation(&mut self.out, &country, &language, &translation)?;
                            session.translations += 1;
                            State::AwaitContinue
                        }
                        None => State::Done,
                    }
                }
                State::AwaitContinue => match self.read_command(&mut input)? {
                    Some(_) => State::PromptCountry,
                    None => State::Done,
                },
                State::Done => {
                    self.formatter.farewell(&mut self.out)?;
                    break;
                }
            };
            log::debug!("console state -> {:?}", state);
        }

        self.out.flush().context("flushing console output")?;
        log::debug!(
            "console session ended after {} translations",
            session.translations
        );
        Ok(session)
    }

    /// Flush pending prompt text, then read one line. `None` means quit or end of input.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected; such a line simply
    /// names no known country or language.
    fn read_command<R: BufRead>(&mut self, input: &mut R) -> Result<Option<String>> {
        self.out.flush().context("flushing console output")?;
        let mut buf = Vec::new();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("reading console input")?;
        if read == 0 {
            log::debug!("end of input");
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        if is_quit(&line) {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Run a session on the process's standard input and output.
pub fn run_program(provider: &dyn TranslationProvider, options: DriverOptions) -> Result<Session> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Driver::new(provider, stdout.lock(), options).run(stdin.lock())
}
