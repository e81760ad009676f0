//! Skirmish CLI - play a castle skirmish in the terminal or run one headless.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Skirmish - a real-time castle skirmish for the terminal
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play an interactive match
    Play {
        #[command(flatten)]
        settings: cli::MatchArgs,

        /// Milliseconds between ticks (default: 1000)
        #[arg(long, default_value = "1000")]
        tick_ms: u64,

        /// Write the debug log here
        #[arg(long, default_value = "debug.log")]
        log_file: std::path::PathBuf,
    },

    /// Run a match without a terminal and print a summary
    Simulate {
        #[command(flatten)]
        settings: cli::MatchArgs,

        /// Maximum ticks to run (default: 200)
        #[arg(short, long, default_value = "200")]
        ticks: u64,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Write the debug log here (default: no log)
        #[arg(long)]
        log_file: Option<std::path::PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play {
            settings,
            tick_ms,
            log_file,
        } => cli::play::execute(&settings, tick_ms, &log_file),

        Commands::Simulate {
            settings,
            ticks,
            format,
            log_file,
        } => cli::simulate::execute(&settings, ticks, format, log_file.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
