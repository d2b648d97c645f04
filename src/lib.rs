// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country-Translator — look up a country's name in another language.
//!
//! Translation data is loaded once into an immutable table owned by a provider, then
//! queried by an interactive console loop.
//!
//! PIECES:
//! 1. **Provider**: the [`provider::TranslationProvider`] contract with a static
//!    fixture backend and a JSON file backend.
//! 2. **Console**: the prompt / read / translate state machine in [`console`].
//! 3. **i18n**: language code to display name resolution for the language prompt.

pub mod config;
pub mod console;
pub mod i18n;
pub mod provider;
pub mod types;
