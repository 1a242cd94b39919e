//! revtag CLI
//!
//! Usage: revtag <COMMAND>
//!
//! Commands:
//!   stamp   Version-tag the build output and rewrite references
//!   ledger  Show the persisted version ledger

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

use cli::{Cli, Commands};
use commands::StampArgs;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Stamp {
            root,
            out,
            build_version,
            dry_run,
            json,
        } => commands::cmd_stamp(StampArgs {
            root,
            out,
            version: build_version,
            dry_run,
            json,
        }),
        Commands::Ledger { root, json } => commands::cmd_ledger(&root, json),
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from `warn`.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .with(filter)
        .init();
}
