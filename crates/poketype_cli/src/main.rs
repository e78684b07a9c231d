//! Type effectiveness calculator.
//!
//! Computes which move types work best against an opponent, lists the
//! matchups of a single type, or answers JSON requests in bulk.
//!
//! Usage:
//!   cargo run -p poketype_cli -- calc --opponent water,flying --moves electric,ice,ground
//!   cargo run -p poketype_cli -- calc -o psychic -m ghost,bug --generation 1
//!   cargo run -p poketype_cli -- chart ghost --defending --revision original
//!   cargo run -p poketype_cli -- batch < requests.jsonl
//!
//! `--log-level` controls engine logging. Without it `RUST_LOG` is read, and
//! logging falls back to `error`.

mod cmd;
mod models;
mod utils;

use clap::{Parser, Subcommand};
use cmd::{batch, calc, chart};

#[derive(Parser)]
#[command(name = "poketype", version, about = "Pokemon type effectiveness calculator")]
struct Cli {
    /// Log filter for env_logger (off, error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and classify move type multipliers against an opponent
    Calc(calc::CalcArgs),

    /// List what a type hits, or what hits it
    Chart(chart::ChartArgs),

    /// Answer newline-delimited JSON requests from stdin
    Batch(batch::BatchArgs),
}

const DEFAULT_LOG_LEVEL: &str = "error";

/// An explicit filter wins; otherwise `RUST_LOG`, then [`DEFAULT_LOG_LEVEL`].
fn logger(log_level: Option<&str>) -> env_logger::Builder {
    match log_level {
        Some(filter) => {
            let mut builder = env_logger::Builder::new();
            builder.parse_filters(filter);
            builder
        }
        None => env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(DEFAULT_LOG_LEVEL),
        ),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger(cli.log_level.as_deref()).init();

    match cli.command {
        Some(Commands::Calc(args)) => calc::execute(args),
        Some(Commands::Chart(args)) => chart::execute(args),
        Some(Commands::Batch(args)) => batch::execute(args),
        None => {
            // Require explicit subcommand to avoid flag ambiguity at the root.
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
