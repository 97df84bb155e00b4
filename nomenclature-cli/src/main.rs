mod cli;
mod config;
mod nomenclature;
mod output;
mod workbook;

use clap::Parser;
use colored::*;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(err) = cli::run(cli) {
        log::debug!("Command failed: {:?}", err);
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

/// Warnings by default, raised by each -v; RUST_LOG wins when set
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
