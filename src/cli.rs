use clap::{Parser, Subcommand};
use pkgfacts::application::dto::OutputFormat;
use std::path::PathBuf;

/// Collect installed-package facts from package manager list output
#[derive(Parser, Debug)]
#[command(name = "pkgfacts")]
#[command(version)]
#[command(
    about = "Collect installed-package facts from package manager list output",
    long_about = None
)]
pub struct Args {
    /// Output format: json or markdown (defaults to the config file, then json)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./pkgfacts.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show executed commands and parse diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the list command for a dialect
    Command {
        #[arg(short, long)]
        dialect: String,

        /// Directory the command should run in
        #[arg(long = "dir")]
        directory: Option<String>,
    },

    /// Parse captured list output (reads stdin when no input file is given)
    Parse {
        #[arg(short, long)]
        dialect: String,

        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory the output was captured in, recorded in the snapshot
        #[arg(long = "dir")]
        directory: Option<String>,
    },

    /// Run list commands on this machine and parse their output
    Collect {
        /// Dialects to collect (defaults to the config file, then npm)
        /// Can be specified multiple times: -d npm -d pip
        #[arg(short, long = "dialect", value_name = "DIALECT")]
        dialects: Vec<String>,

        #[arg(long = "dir")]
        directory: Option<String>,
    },

    /// Compare two JSON snapshot documents
    Diff {
        old: PathBuf,
        new: PathBuf,

        /// Only compare this dialect
        #[arg(short, long)]
        dialect: Option<String>,
    },

    /// List known dialects
    Dialects,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
