//! Shipkeep Command Line Interface
//!
//! Tools for working with outline ordering keys and estimate sheets.

mod commands;
mod config;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{catalog, codec, ingest, outline};
use crate::config::Config;
use crate::error::Result;

/// Shipkeep Command Line Interface
///
/// Encode outline positions into sortable keys and ingest estimate sheets.
#[derive(Parser, Debug)]
#[command(name = "shipkeep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "SHIPKEEP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed table format
    Table,
    /// JSON format
    Json,
    /// One value per line
    Plain,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode dotted index paths into ordering keys
    Encode {
        /// Paths such as 1.2.10
        #[arg(required = true)]
        paths: Vec<String>,

        /// Reject zero segments instead of encoding them lossily
        #[arg(long)]
        strict: bool,
    },

    /// Decode ordering keys into dotted index paths
    Decode {
        /// Keys as decimal integers
        #[arg(required = true, allow_negative_numbers = true)]
        keys: Vec<i64>,
    },

    /// Print index paths in outline order
    Sort {
        /// File with one path per line (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Print the paths at or below a root, in outline order
    Subtree {
        /// Root of the subtree
        root: String,

        /// File with one path per line (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Parse a CSV export of an estimate sheet into materials profiles
    Ingest {
        /// Path to the CSV file
        file: PathBuf,

        /// Sector the sheet belongs to
        #[arg(short, long)]
        sector: String,

        /// Maintenance instance id to attach the profiles to
        #[arg(short, long, default_value = "")]
        maintenance: String,
    },

    /// Show the configured sectors and maintenance tiers
    Catalog,
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directives()));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())?;
    init_logging(&config);

    match cli.command {
        Commands::Encode { paths, strict } => codec::encode(&paths, strict, cli.format),
        Commands::Decode { keys } => codec::decode(&keys, cli.format),
        Commands::Sort { file } => outline::sort(file.as_deref(), cli.format),
        Commands::Subtree { root, file } => outline::subtree(&root, file.as_deref(), cli.format),
        Commands::Ingest { file, sector, maintenance } => {
            ingest::run(&config, &file, &sector, &maintenance, cli.format)
        }
        Commands::Catalog => catalog::run(&config, cli.format),
    }
}
