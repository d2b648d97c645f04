// SPDX-License-Identifier: PMPL-1.0-or-later

//! Command-line configuration

use crate::console::DriverOptions;
use crate::provider::{JsonProvider, StaticTableProvider, TranslationProvider};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "data/sample.json";

#[derive(Debug, Parser)]
#[command(name = "country-translator")]
#[command(version)]
#[command(about = "Look up a country's name in another language")]
#[command(long_about = None)]
pub struct Cli {
    /// JSON file with one record per country
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Translation backend
    #[arg(short, long, value_enum, default_value = "json")]
    pub provider: ProviderArg,

    /// Use the sample data compiled into the binary instead of reading --data
    #[arg(long, conflicts_with = "data")]
    pub embedded: bool,

    /// List bare language codes instead of language names
    #[arg(long)]
    pub raw_codes: bool,

    /// Disable coloured headers
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ProviderArg {
    /// Records parsed from a JSON data file
    Json,
    /// Built-in single-country fixture
    Static,
}

impl Cli {
    /// Construct the selected provider. Fails when the data file is missing or malformed.
    pub fn build_provider(&self) -> Result<Box<dyn TranslationProvider>> {
        let provider: Box<dyn TranslationProvider> = match self.provider {
            ProviderArg::Static => Box::new(StaticTableProvider::new()),
            ProviderArg::Json if self.embedded => Box::new(JsonProvider::embedded_sample()?),
            ProviderArg::Json => Box::new(JsonProvider::from_path(&self.data)?),
        };
        log::info!("using {} provider", provider.describe());
        Ok(provider)
    }

    pub fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            show_language_names: !self.raw_codes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["country-translator"]);
        assert_eq!(cli.data, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(cli.provider, ProviderArg::Json);
        assert!(!cli.embedded);
        assert!(cli.driver_options().show_language_names);
    }

    #[test]
    fn static_provider_needs_no_file() {
        let cli = Cli::parse_from([
            "country-translator",
            "--provider",
            "static",
            "--data",
            "/nonexistent/data.json",
        ]);
        let provider = cli.build_provider().unwrap();
        assert_eq!(provider.countries(), vec!["can"]);
    }

    #[test]
    fn missing_data_file_is_fatal() {
        let cli = Cli::parse_from(["country-translator", "-d", "/nonexistent/data.json"]);
        let err = cli.build_provider().err().unwrap();
        assert!(format!("{:#}", err).contains("/nonexistent/data.json"));
    }

    #[test]
    fn embedded_sample() {
        let cli = Cli::parse_from(["country-translator", "--embedded", "--raw-codes"]);
        let provider = cli.build_provider().unwrap();
        assert_eq!(provider.translate("can", "en"), "Canada");
        assert!(!cli.driver_options().show_language_names);
    }

    #[test]
    fn embedded_conflicts_with_data() {
        assert!(Cli::try_parse_from(["country-translator", "--embedded", "-d", "x.json"]).is_err());
    }
}
