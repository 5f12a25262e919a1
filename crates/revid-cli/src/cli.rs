//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// revid - Build a revision descriptor from git history and an option file
#[derive(Parser, Debug)]
#[command(name = "revid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the revision descriptor
    ///
    /// Examples:
    ///   revid describe revision.options
    ///   revid describe build/revision.options --json
    Describe {
        /// Path to the option file
        config: PathBuf,

        /// Output the descriptor and its parts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a Rust module exposing the descriptor as a constant
    Generate {
        /// Path to the option file
        config: PathBuf,

        /// Directory to write into (defaults to the option file's directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Show the resolved options
    Options {
        /// Path to the option file
        config: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Run a shell command the way revision queries are run
    Exec {
        /// Directory (or a file inside it) to run in
        directory: PathBuf,

        /// Command text, joined with spaces
        #[arg(last = true, required = true)]
        command: Vec<String>,
    },
}
