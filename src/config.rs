//! Run configuration: window size and match pacing.

use std::time::Duration;

use crate::game::{Rules, SpawnSchedule};

/// Environment variable overriding the window width.
pub const WIDTH_VAR: &str = "WINDOW_WIDTH";
/// Environment variable overriding the window height.
pub const HEIGHT_VAR: &str = "WINDOW_HEIGHT";

/// Default time between simulation steps.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Size of the drawing surface, header row included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    /// Columns.
    pub width: u16,
    /// Rows.
    pub height: u16,
}

impl WindowSize {
    /// Resolve the window size from overrides, falling back to `native`.
    ///
    /// Each dimension is taken from its variable when that parses as an
    /// integer and from the native size otherwise.
    #[must_use]
    pub fn resolve(native: (u16, u16), lookup: impl Fn(&str) -> Option<String>) -> Self {
        let dimension = |var: &str, fallback: u16| match lookup(var).map(|raw| raw.parse::<u16>()) {
            Some(Ok(value)) => value,
            Some(Err(err)) => {
                tracing::debug!(var, %err, fallback, "Ignoring unparsable window size");
                fallback
            }
            None => fallback,
        };

        Self {
            width: dimension(WIDTH_VAR, native.0),
            height: dimension(HEIGHT_VAR, native.1),
        }
    }

    /// Resolve the window size from the process environment.
    #[must_use]
    pub fn from_env(native: (u16, u16)) -> Self {
        Self::resolve(native, |var| std::env::var(var).ok())
    }
}

/// Everything needed to start a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Window to fit the map into.
    pub window: WindowSize,
    /// Time between simulation steps.
    pub tick_interval: Duration,
    /// Which ticks bring reinforcements.
    pub spawn: SpawnSchedule,
    /// Match rules.
    pub rules: Rules,
}

impl GameConfig {
    /// Configuration with default pacing and rules for the given window.
    #[must_use]
    pub fn new(window: WindowSize) -> Self {
        Self {
            window,
            tick_interval: DEFAULT_TICK_INTERVAL,
            spawn: SpawnSchedule::default(),
            rules: Rules::default(),
        }
    }
}
