// SPDX-License-Identifier: PMPL-1.0-or-later

//! country-translator: pick a country, pick a language, read the translated name.

use anyhow::Result;
use clap::Parser;
use country_translator::config::Cli;
use country_translator::console;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let provider = cli.build_provider()?;
    let session = console::run_program(provider.as_ref(), cli.driver_options())?;
    log::info!("session finished: {} translations", session.translations);

    Ok(())
}
