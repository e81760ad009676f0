//! CLI command implementations for Skirmish.

pub(crate) mod play;
pub(crate) mod simulate;

mod output;

use clap::ValueEnum;
use skirmish::config::{GameConfig, WindowSize};
use skirmish::game::{Rules, SpawnSchedule, DEFAULT_SPAWN_EVERY};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Output format for the `simulate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable summary with the final map.
    Text,
    /// Machine-readable JSON summary.
    Json,
}

/// Match settings shared by every command.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct MatchArgs {
    /// Window width (default: `WINDOW_WIDTH`, then the terminal width)
    #[arg(long)]
    pub(crate) width: Option<u16>,

    /// Window height including the header row (default: `WINDOW_HEIGHT`, then the terminal height)
    #[arg(long)]
    pub(crate) height: Option<u16>,

    /// Ticks between unit spawns
    #[arg(long, default_value_t = DEFAULT_SPAWN_EVERY)]
    pub(crate) spawn_every: u32,

    /// Starting health of each castle
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(i32).range(1..))]
    pub(crate) castle_health: i32,
}

impl MatchArgs {
    /// Build the match configuration.
    ///
    /// Flags win over the environment, which wins over `native`.
    pub(crate) fn config(&self, native: (u16, u16), tick_interval: Duration) -> GameConfig {
        let mut window = WindowSize::from_env(native);
        if let Some(width) = self.width {
            window.width = width;
        }
        if let Some(height) = self.height {
            window.height = height;
        }

        GameConfig {
            window,
            tick_interval,
            spawn: SpawnSchedule::new(self.spawn_every),
            rules: Rules {
                castle_health: self.castle_health,
                ..Rules::default()
            },
        }
    }
}

/// Send `tracing` output to a file.
///
/// The filter comes from `RUST_LOG` and defaults to `debug`.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a subscriber is
/// already installed.
pub(crate) fn init_logging(path: &Path) -> Result<(), CliError> {
    let file = File::create(path)
        .map_err(|e| CliError::new(format!("Failed to create {}: {e}", path.display())))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| CliError::new(format!("Failed to start logging: {e}")))
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<skirmish::GameError> for CliError {
    fn from(e: skirmish::GameError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(e.to_string())
    }
}
