//! vfdocs - configuration tool for the VERI*FACTU documentation site.
//!
//! Loads `vfdocs.toml`, validates it, and emits the configuration
//! object the external site generator consumes. The generator itself
//! and the documented AEAT SOAP service are opaque collaborators.

mod cli;
mod config;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    // Init scaffolds a config; every other command loads one and
    // receives it as a parameter
    match &cli.command {
        Commands::Init { dir } => cli::init::init_site(dir.as_deref()),
        Commands::Check { args } => {
            let config = SiteConfig::load(&cli.config)?;
            cli::check::run_check(args, &config)
        }
        Commands::Emit { args } => {
            let config = SiteConfig::load(&cli.config)?;
            cli::emit::run_emit(args, &config)
        }
        Commands::Query { args } => {
            let config = SiteConfig::load(&cli.config)?;
            cli::query::run_query(args, &config)
        }
    }
}
