//! sitefeed - sitemap entries and robots bodies for content-managed sites.

mod cli;
mod config;
mod content;
mod core;
mod generator;
mod logger;
mod sitemap;
#[cfg(test)]
mod test_support;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::FeedConfig;
use generator::EntriesMode;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = FeedConfig::load(&cli)?;

    match &cli.command {
        Commands::Entries {
            args,
            pretty,
            auto_shared,
            item,
            output,
        } => {
            let mode = match (item, auto_shared) {
                (Some(id), _) => EntriesMode::Item(*id),
                (None, true) => EntriesMode::AutoShared,
                (None, false) => EntriesMode::All,
            };
            let options = cli::entries::EntriesOptions {
                args,
                pretty: *pretty,
                mode,
                output: output.as_ref(),
            };
            cli::entries::run_entries(&options, &config)
        }
        Commands::Robots { args } => cli::robots::run_robots(args, &config),
        Commands::Serve { .. } => {
            let tree = cli::load_content(&config)?;
            cli::serve::serve(&config, &tree)
        }
        Commands::Check => cli::check::run_check(&config),
    }
}
