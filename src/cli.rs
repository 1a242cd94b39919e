use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// revtag - change-driven version tags for build output
#[derive(Parser, Debug)]
#[command(name = "revtag")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Version-tag the build output and rewrite references
    Stamp {
        /// Build root (holds revtag.toml and the ledger)
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Output directory, relative to the root
        #[arg(long)]
        out: Option<PathBuf>,

        /// Candidate version token for this build
        #[arg(long = "version", value_name = "N")]
        build_version: Option<String>,

        /// Compute the plan without writing files or the ledger
        #[arg(long)]
        dry_run: bool,

        /// Print the rename plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the persisted version ledger
    Ledger {
        /// Build root (holds revtag.toml and the ledger)
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Print the ledger as JSON
        #[arg(long)]
        json: bool,
    },
}
