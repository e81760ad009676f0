//! Simulate command implementation - headless match run.

use super::output::{format_text, MatchSummary, Totals};
use super::{init_logging, CliError, MatchArgs, OutputFormat};
use skirmish::config::DEFAULT_TICK_INTERVAL;
use skirmish::game::GameState;
use skirmish::session::{Control, Event, Session};
use std::path::Path;

/// Window used when neither flags nor the environment give a size.
const DEFAULT_WINDOW: (u16, u16) = (80, 24);

/// Execute the simulate command.
///
/// Runs up to `ticks` timer events with no keyboard input and prints a
/// summary. Stops early if a castle falls.
///
/// # Errors
///
/// Returns an error if the match cannot be created or output fails.
pub(crate) fn execute(
    settings: &MatchArgs,
    ticks: u64,
    format: OutputFormat,
    log_file: Option<&Path>,
) -> Result<(), CliError> {
    if let Some(path) = log_file {
        init_logging(path)?;
    }

    let config = settings.config(DEFAULT_WINDOW, DEFAULT_TICK_INTERVAL);
    let state = GameState::with_rules(config.window.width, config.window.height, config.rules)?;
    let mut session = Session::new(state, config.spawn);
    let mut totals = Totals::default();

    for _ in 0..ticks {
        let control = session.handle(Event::Tick);
        if let Some(report) = session.last_report() {
            totals.record(&report);
        }
        if matches!(control, Control::Exit(_)) {
            break;
        }
    }

    let state = session.into_state();
    let summary = MatchSummary::new(&state, &totals);

    match format {
        OutputFormat::Text => print!("{}", format_text(&state, &summary)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}
