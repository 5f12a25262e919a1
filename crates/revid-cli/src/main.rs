//! revid CLI
//!
//! Prints or generates a revision descriptor for the repository an option
//! file belongs to.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Verbose mode enabled");
        }
    }

    match cli.command {
        Commands::Describe { config, json } => commands::run_describe(&config, json),
        Commands::Generate { config, out_dir } => {
            commands::run_generate(&config, out_dir.as_deref())
        }
        Commands::Options { config, json } => commands::run_options(&config, json),
        Commands::Exec { directory, command } => commands::run_exec(&directory, &command),
    }
}
