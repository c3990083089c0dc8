//! CLI interface for loopy.
//!
//! Each subcommand is non-interactive: arguments in, text or JSON out.
//! Diagnostics go to stderr through the logger; results go to stdout.
//!
//! - `loopy ingest [DIR]` assembles journals and persists them.
//! - `loopy totals [DIR]` assembles journals in memory and prints totals.
//! - `loopy systems` lists what earlier ingests stored.

mod format;
mod ingest;
mod systems;
mod totals;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::ingest::IngestOptions;
use crate::storage::Storage;

/// loopy: valuable bodies in your Elite Dangerous journals.
#[derive(Debug, Parser)]
#[command(name = "loopy", after_long_help = USAGE_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

const USAGE_HELP: &str = r"Examples:
  loopy ingest
  loopy ingest ~/journals
  loopy totals --json
  loopy totals --by-system ~/journals
  loopy systems

Settings are read from ~/.loopy/config.toml:
  journal-dir = '/path/to/journals'
  database = '/path/to/loopy.db'
  reset-cursor-per-file = false

Set LOOPY_LOG (e.g. LOOPY_LOG=loopy=debug) for diagnostics on stderr.";

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Assemble every journal in DIR and store the systems, stars and bodies.
    ///
    /// Records already stored by an earlier run are skipped.
    Ingest {
        /// Journal directory. Defaults to the configured one.
        dir: Option<PathBuf>,
    },

    /// Assemble every journal in DIR and print valuable-body totals.
    ///
    /// One row per star bucket (type, subclass, luminosity), in key order.
    /// Nothing is written to the database.
    Totals {
        /// Journal directory. Defaults to the configured one.
        dir: Option<PathBuf>,

        /// Print the totals as JSON.
        #[arg(long)]
        json: bool,

        /// Print a table per system before the overall totals.
        #[arg(long, conflicts_with = "json")]
        by_system: bool,
    },

    /// List systems stored by earlier ingests.
    Systems,
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();
    let options = IngestOptions {
        reset_cursor_per_file: config.reset_cursor_per_file,
    };

    match cli.command {
        Command::Ingest { dir } => {
            let dir = journal_dir(config, dir)?;
            let storage = open_storage(config)?;
            ingest::cmd_ingest(storage, &dir, options)
        }
        Command::Totals {
            dir,
            json,
            by_system,
        } => {
            let dir = journal_dir(config, dir)?;
            totals::cmd_totals(&dir, options, json, by_system)
        }
        Command::Systems => {
            let storage = open_storage(config)?;
            systems::cmd_systems(&storage)
        }
    }
}

fn journal_dir(config: &Config, dir: Option<PathBuf>) -> Result<PathBuf, String> {
    dir.or_else(|| config.journal_dir())
        .ok_or_else(|| "no journal directory: pass DIR or set journal-dir".to_string())
}

fn open_storage(config: &Config) -> Result<Storage, String> {
    let path = config
        .database()
        .ok_or("could not determine database path: set database in config")?;
    Storage::open(&path).map_err(|e| format!("failed to open {}: {e}", path.display()))
}
