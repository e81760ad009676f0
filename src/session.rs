//! The single owner of a running match.
//!
//! Timer ticks and keyboard actions reach the session as [`Event`]s, one at a
//! time. The session applies them and tells the caller what to do next, so
//! the match state never needs a lock.

use crate::game::{ActionEffect, GameState, Outcome, SpawnSchedule, TickReport};
use crate::input::Action;

/// Something the session has to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The tick timer fired.
    Tick,
    /// The player pressed a key.
    Input(Action),
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The player quit.
    Escape,
    /// A castle fell.
    Finished(Outcome),
}

/// What the caller should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// State changed; draw a new frame.
    Redraw,
    /// Nothing changed.
    Idle,
    /// Tear down and exit.
    Exit(ExitReason),
}

/// A running match plus its spawn schedule.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    schedule: SpawnSchedule,
    status: Option<&'static str>,
    last_report: Option<TickReport>,
}

impl Session {
    /// Wrap a freshly created match.
    #[must_use]
    pub const fn new(state: GameState, schedule: SpawnSchedule) -> Self {
        Self {
            state,
            schedule,
            status: None,
            last_report: None,
        }
    }

    /// The match state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// A message to show next to the header, such as "Game paused".
    #[must_use]
    pub const fn status(&self) -> Option<&'static str> {
        self.status
    }

    /// Report of the most recent simulation step.
    #[must_use]
    pub const fn last_report(&self) -> Option<TickReport> {
        self.last_report
    }

    /// Process one event.
    pub fn handle(&mut self, event: Event) -> Control {
        match event {
            Event::Tick => self.on_tick(),
            Event::Input(action) => self.on_input(action),
        }
    }

    fn on_tick(&mut self) -> Control {
        if self.state.paused {
            return Control::Idle;
        }

        if self.schedule.is_due(self.state.ticks() + 1) {
            self.state.spawn_units();
        }
        self.last_report = Some(self.state.step());

        self.check_end()
    }

    fn on_input(&mut self, action: Action) -> Control {
        match self.state.apply_action(action) {
            ActionEffect::Quit => {
                tracing::info!("Player quit");
                return Control::Exit(ExitReason::Escape);
            }
            ActionEffect::Paused => {
                tracing::info!(tick = self.state.ticks(), "Game paused");
                self.status = Some("Game paused");
            }
            ActionEffect::Rejected => {
                tracing::warn!(tick = self.state.ticks(), "Unknown key, pausing");
                self.status = Some("Unknown key");
            }
            ActionEffect::Moved => {
                tracing::trace!(location = ?self.state.avatar.location, "Avatar moved");
            }
        }

        self.check_end()
    }

    fn check_end(&self) -> Control {
        match self.state.outcome() {
            Some(outcome) => {
                tracing::info!(?outcome, tick = self.state.ticks(), "Match over");
                Control::Exit(ExitReason::Finished(outcome))
            }
            None => Control::Redraw,
        }
    }

    /// Give up the match state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Location;

    fn create_session() -> Session {
        Session::new(GameState::new(10, 5).unwrap(), SpawnSchedule::default())
    }

    #[test]
    fn test_spawns_on_schedule() {
        let mut session = create_session();
        for _ in 0..4 {
            assert_eq!(session.handle(Event::Tick), Control::Redraw);
        }
        assert!(session.state().player.units.is_empty());

        session.handle(Event::Tick);
        assert_eq!(session.state().player.units.len(), 1);
        assert_eq!(session.state().enemy.units.len(), 1);
        assert_eq!(session.last_report().map(|r| r.tick), Some(5));
    }

    #[test]
    fn test_input_does_not_tick() {
        let mut session = create_session();
        assert_eq!(session.handle(Event::Input(Action::MoveRight)), Control::Redraw);
        assert_eq!(session.state().ticks(), 0);
        assert_eq!(session.state().avatar.location, Location::new(1, 0));
        assert!(session.last_report().is_none());
    }

    #[test]
    fn test_paused_ticks_are_ignored() {
        let mut session = create_session();
        assert_eq!(session.handle(Event::Input(Action::Pause)), Control::Redraw);
        assert_eq!(session.status(), Some("Game paused"));

        for _ in 0..10 {
            assert_eq!(session.handle(Event::Tick), Control::Idle);
        }
        assert_eq!(session.state().ticks(), 0);

        // Movement still applies while paused.
        assert_eq!(session.handle(Event::Input(Action::MoveDown)), Control::Redraw);
        assert_eq!(session.state().avatar.location, Location::new(0, 1));
    }

    #[test]
    fn test_unknown_key_pauses() {
        let mut session = create_session();
        session.handle(Event::Input(Action::Unrecognized));
        assert!(session.state().paused);
        assert_eq!(session.status(), Some("Unknown key"));
        assert_eq!(session.handle(Event::Tick), Control::Idle);
    }

    #[test]
    fn test_escape_exits() {
        let mut session = create_session();
        assert_eq!(
            session.handle(Event::Input(Action::Escape)),
            Control::Exit(ExitReason::Escape)
        );
    }

    #[test]
    fn test_tick_reports_victory() {
        let mut session = create_session();
        let mut state = session.into_state();
        state.enemy.castle.health = 1;
        state.avatar.location = state.enemy.castle.location.offset(0, -1);
        session = Session::new(state, SpawnSchedule::default());

        assert_eq!(
            session.handle(Event::Tick),
            Control::Exit(ExitReason::Finished(Outcome::Victory))
        );
    }

    #[test]
    fn test_input_checks_end_state() {
        let mut state = GameState::new(10, 5).unwrap();
        state.player.castle.health = 0;
        let mut session = Session::new(state, SpawnSchedule::default());

        assert_eq!(
            session.handle(Event::Input(Action::MoveRight)),
            Control::Exit(ExitReason::Finished(Outcome::Defeat))
        );
    }
}
