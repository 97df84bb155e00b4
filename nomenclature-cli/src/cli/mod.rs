//! Command-line interface

pub mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use commands::{GenerateArgs, OptionsArgs, SheetArgs, TagsArgs};

#[derive(Parser)]
#[command(name = "nomenclature-cli")]
#[command(version, about = "Generate equipment-tag nomenclatures from a reference table and a tag workbook", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ~/.config/nomenclature-cli/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the next level of location choices from the reference table
    Options(OptionsArgs),

    /// Show the Term/Abbreviation table of the workbook's Tag Summary sheet
    Tags(TagsArgs),

    /// Show the Name/Abbreviation table of one equipment sheet
    Sheet(SheetArgs),

    /// Generate nomenclatures for a location and a set of equipment
    Generate(GenerateArgs),
}

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Options(args) => commands::options::handle_options_command(args),
        Commands::Tags(args) => commands::tags::handle_tags_command(args, &config),
        Commands::Sheet(args) => commands::tags::handle_sheet_command(args),
        Commands::Generate(args) => commands::generate::handle_generate_command(args, &config),
    }
}
