//! Play command implementation - interactive TUI.
//!
//! Three threads cooperate: one blocks on the keyboard, one on the tick
//! timer, and the calling thread owns the match. Both producers hand their
//! events over a rendezvous channel, so the match sees exactly one event at
//! a time.

use super::{init_logging, CliError, MatchArgs};
use crossterm::{
    event::{self, Event as TermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use skirmish::game::{GameState, Outcome};
use skirmish::input::Action;
use skirmish::render::{self, render_frame, AVATAR_GLYPH, CASTLE_GLYPH, UNIT_GLYPH};
use skirmish::session::{Control, Event, ExitReason, Session};
use std::io::{stdout, Stdout};
use std::path::Path;
use std::sync::mpsc::{self, SyncSender};
use std::thread;
use std::time::Duration;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if logging, the terminal, or the match cannot be set up.
pub(crate) fn execute(settings: &MatchArgs, tick_ms: u64, log_file: &Path) -> Result<(), CliError> {
    init_logging(log_file)?;

    let native = crossterm::terminal::size()?;
    let config = settings.config(native, Duration::from_millis(tick_ms.max(1)));
    let state = GameState::with_rules(config.window.width, config.window.height, config.rules)?;
    tracing::info!(
        width = config.window.width,
        height = config.window.height,
        tick_ms,
        spawn_every = config.spawn.every(),
        "Starting game"
    );
    let session = Session::new(state, config.spawn);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let result = run_loop(&mut terminal, session, config.tick_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match result? {
        ExitReason::Escape => println!("Match abandoned."),
        ExitReason::Finished(Outcome::Victory) => println!("Victory! The enemy castle has fallen."),
        ExitReason::Finished(Outcome::Defeat) => println!("Defeat. Your castle has fallen."),
        ExitReason::Finished(Outcome::Draw) => println!("Draw. Both castles have fallen."),
    }

    Ok(())
}

fn run_loop(terminal: &mut Term, mut session: Session, tick: Duration) -> Result<ExitReason, CliError> {
    let (sender, events) = mpsc::sync_channel::<Event>(0);

    let input_sender = sender.clone();
    let _input = thread::Builder::new()
        .name("input".to_string())
        .spawn(move || read_input(&input_sender))?;
    let _timer = thread::Builder::new()
        .name("timer".to_string())
        .spawn(move || run_timer(&sender, tick))?;

    draw(terminal, &session)?;

    for event in events {
        match session.handle(event) {
            Control::Redraw => draw(terminal, &session)?,
            Control::Idle => {}
            Control::Exit(reason) => return Ok(reason),
        }
    }

    Err(CliError::new("Event sources stopped unexpectedly"))
}

/// Forward key presses until the session goes away.
fn read_input(sender: &SyncSender<Event>) {
    loop {
        match event::read() {
            Ok(TermEvent::Key(key)) => {
                if let Some(action) = Action::from_key(key)
                    && sender.send(Event::Input(action)).is_err()
                {
                    break;
                }
            }
            Ok(_) => {}
            Err(err) => {
                tracing::error!(%err, "Failed to read terminal input");
                // Without input the player could never leave.
                let _ = sender.send(Event::Input(Action::Escape));
                break;
            }
        }
    }
}

/// Send a tick every `interval` until the session goes away.
fn run_timer(sender: &SyncSender<Event>, interval: Duration) {
    loop {
        thread::sleep(interval);
        if sender.send(Event::Tick).is_err() {
            break;
        }
    }
}

fn draw(terminal: &mut Term, session: &Session) -> Result<(), CliError> {
    let frame = render_frame(session.state());
    terminal
        .draw(|f| ui(f, &frame, session.status()))
        .map_err(|e| CliError::new(e.to_string()))?;
    Ok(())
}

fn ui(f: &mut Frame, frame: &render::Frame, status: Option<&str>) {
    let mut header = vec![Span::styled(
        frame.header.as_str(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    if let Some(status) = status {
        header.push(Span::raw("  "));
        header.push(Span::styled(status, Style::default().fg(Color::Yellow)));
    }

    let mut lines = Vec::with_capacity(frame.rows.len() + 1);
    lines.push(Line::from(header));
    lines.extend(frame.rows.iter().map(|row| {
        Line::from(
            row.chars()
                .map(|glyph| Span::styled(glyph.to_string(), glyph_style(glyph)))
                .collect::<Vec<_>>(),
        )
    }));

    f.render_widget(Paragraph::new(lines), f.area());
}

fn glyph_style(glyph: char) -> Style {
    match glyph {
        CASTLE_GLYPH => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        AVATAR_GLYPH => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        UNIT_GLYPH => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::DarkGray),
    }
}
