#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use skirmish::game::{check_invariants, GameState, Rules, SpawnSchedule};
use skirmish::input::Action;
use skirmish::session::{Control, Event, Session};

/// One fuzzed event.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzEvent {
    Tick,
    Up,
    Down,
    Left,
    Right,
    Pause,
    Unknown,
    Escape,
}

impl From<FuzzEvent> for Event {
    fn from(event: FuzzEvent) -> Self {
        match event {
            FuzzEvent::Tick => Self::Tick,
            FuzzEvent::Up => Self::Input(Action::MoveUp),
            FuzzEvent::Down => Self::Input(Action::MoveDown),
            FuzzEvent::Left => Self::Input(Action::MoveLeft),
            FuzzEvent::Right => Self::Input(Action::MoveRight),
            FuzzEvent::Pause => Self::Input(Action::Pause),
            FuzzEvent::Unknown => Self::Input(Action::Unrecognized),
            FuzzEvent::Escape => Self::Input(Action::Escape),
        }
    }
}

/// Structured input for session fuzzing.
#[derive(Arbitrary, Debug)]
struct SessionInput {
    /// Window width.
    width: u8,
    /// Window height, header row included.
    height: u8,
    /// Ticks between spawns.
    spawn_every: u8,
    /// Starting castle health.
    castle_health: u8,
    /// Events fed to the session in order.
    events: Vec<FuzzEvent>,
}

fuzz_target!(|input: SessionInput| {
    let rules = Rules {
        castle_health: i32::from(input.castle_health.max(1)),
        ..Rules::default()
    };

    // Degenerate windows must be rejected, never panic.
    let Ok(state) = GameState::with_rules(u16::from(input.width), u16::from(input.height), rules)
    else {
        return;
    };
    let mut session = Session::new(state, SpawnSchedule::new(u32::from(input.spawn_every)));

    // Cap events to keep runs short
    for &event in input.events.iter().take(2_000) {
        let control = session.handle(event.into());

        let violations = check_invariants(session.state());
        if !violations.is_empty() {
            panic!("Invariant violations after {event:?}: {violations:?}");
        }

        match control {
            Control::Exit(_) => {
                assert!(
                    session.state().is_end_state() || matches!(event, FuzzEvent::Escape),
                    "Session exited without a reason"
                );
                break;
            }
            Control::Idle => assert!(session.state().paused),
            Control::Redraw => assert!(!session.state().is_end_state()),
        }
    }
});
