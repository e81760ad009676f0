//! Whole-match scenarios driven through the public API.
//!
//! Run with: cargo test --test scenario

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use skirmish::game::{Location, Rules, Side, SpawnSchedule, Target, UnitId, check_invariants};
use skirmish::input::Action;
use skirmish::render::render_frame;
use skirmish::session::{Control, Event, ExitReason, Session};
use skirmish::{GameState, Outcome};

/// Put a unit on the board at `(x, y)` with the given health.
fn place_unit(state: &mut GameState, side: Side, id: u32, x: i32, y: i32, health: i32) -> Target {
    let faction = state.faction_mut(side);
    faction.spawn_unit(UnitId(id), health);
    let unit = faction.unit_mut(UnitId(id)).unwrap();
    unit.entity.location = Location::new(x, y);
    Target::Unit(side, UnitId(id))
}

#[test]
fn test_five_spawns_without_contact() {
    let mut state = GameState::new(10, 5).unwrap();
    assert_eq!(state.player.castle.location, Location::new(0, 0));
    assert_eq!(state.enemy.castle.location, Location::new(9, 3));

    for _ in 0..5 {
        state.spawn_units();
        let report = state.step();
        assert_eq!(report.hits, 0);
        assert!(check_invariants(&state).is_empty());
    }

    for faction in [&state.player, &state.enemy] {
        assert_eq!(faction.units.len(), 5);
        assert!(faction.units.iter().all(|u| u.entity.health == 1));
        assert_eq!(faction.castle.health, 10);
        assert_eq!(faction.money, 0);
    }
    assert!(!state.is_end_state());
}

#[test]
fn test_frame_after_first_spawn() {
    let mut state = GameState::new(10, 5).unwrap();
    state.spawn_units();
    state.step();

    let frame = render_frame(&state);
    assert_eq!(frame.header, "P:1 E:1 P$:0 E$:0");
    assert_eq!(frame.rows.len(), 4);
    assert!(frame.rows.iter().all(|row| row.chars().count() == 10));
}

#[test]
fn test_casualties_pay_the_opposing_faction() {
    let mut state = GameState::new(20, 11).unwrap();
    place_unit(&mut state, Side::Player, 100, 5, 5, 1);
    place_unit(&mut state, Side::Player, 101, 5, 6, 1);
    place_unit(&mut state, Side::Enemy, 200, 6, 5, 1);
    place_unit(&mut state, Side::Enemy, 201, 6, 6, 1);

    let report = state.step();

    assert_eq!(report.player_losses, 1);
    assert_eq!(report.enemy_losses, 1);
    assert_eq!(state.player.units.len(), 1);
    assert_eq!(state.enemy.units.len(), 1);
    assert_eq!(state.player.money, 1);
    assert_eq!(state.enemy.money, 1);
    assert!(state.player.unit(UnitId(100)).is_none());
    assert!(state.enemy.unit(UnitId(200)).is_none());
    assert!(check_invariants(&state).is_empty());
}

#[test]
fn test_avatar_death_sends_it_home() {
    let mut state = GameState::new(20, 11).unwrap();
    state.avatar.location = Location::new(10, 5);
    state.avatar.health = 1;
    let attacker = place_unit(&mut state, Side::Enemy, 7, 11, 5, 5);

    let report = state.step();

    assert!(report.avatar_respawned);
    assert_eq!(state.avatar.location, state.player.castle.location);
    assert_eq!(state.avatar.health, state.avatar.max_health);
    assert_eq!(state.enemy.money, 5);
    // The avatar struck back before dying.
    assert_eq!(state.entity(attacker).unwrap().health, 4);

    // The stale target is dropped once it is out of reach.
    state.step();
    assert_eq!(state.avatar.target, None);
}

#[test]
fn test_avatar_brings_down_enemy_castle() {
    let rules = Rules {
        castle_health: 3,
        ..Rules::default()
    };
    let state = GameState::with_rules(10, 5, rules).unwrap();
    let mut session = Session::new(state, SpawnSchedule::default());

    for _ in 0..8 {
        assert_eq!(session.handle(Event::Input(Action::MoveRight)), Control::Redraw);
    }
    for _ in 0..3 {
        assert_eq!(session.handle(Event::Input(Action::MoveDown)), Control::Redraw);
    }
    assert_eq!(session.state().avatar.location, Location::new(8, 3));
    assert_eq!(session.state().ticks(), 0);

    assert_eq!(session.handle(Event::Tick), Control::Redraw);
    assert_eq!(session.handle(Event::Tick), Control::Redraw);
    assert_eq!(
        session.handle(Event::Tick),
        Control::Exit(ExitReason::Finished(Outcome::Victory))
    );

    let state = session.into_state();
    assert_eq!(state.enemy.castle.health, 0);
    assert_eq!(state.player.castle.health, 3);
    assert_eq!(state.outcome(), Some(Outcome::Victory));
}

#[test]
fn test_pause_freezes_ticks_but_not_the_avatar() {
    let state = GameState::new(10, 5).unwrap();
    let mut session = Session::new(state, SpawnSchedule::new(1));

    session.handle(Event::Tick);
    assert_eq!(session.state().player.units.len(), 1);

    assert_eq!(session.handle(Event::Input(Action::Pause)), Control::Redraw);
    assert_eq!(session.status(), Some("Game paused"));

    for _ in 0..10 {
        assert_eq!(session.handle(Event::Tick), Control::Idle);
    }
    assert_eq!(session.state().ticks(), 1);
    assert_eq!(session.state().player.units.len(), 1);

    assert_eq!(session.handle(Event::Input(Action::MoveDown)), Control::Redraw);
    assert_eq!(session.state().avatar.location, Location::new(0, 1));
}

#[test]
fn test_escape_ends_session() {
    let state = GameState::new(10, 5).unwrap();
    let mut session = Session::new(state, SpawnSchedule::default());

    assert_eq!(
        session.handle(Event::Input(Action::Escape)),
        Control::Exit(ExitReason::Escape)
    );
}

#[test]
fn test_long_run_keeps_invariants() {
    let state = GameState::new(40, 20).unwrap();
    let mut session = Session::new(state, SpawnSchedule::new(2));

    for _ in 0..500 {
        let control = session.handle(Event::Tick);
        assert!(check_invariants(session.state()).is_empty());
        // Units never attack castles, so without the avatar nobody wins.
        assert_eq!(control, Control::Redraw);
    }

    let state = session.state();
    assert_eq!(state.player.castle.health, 10);
    assert_eq!(state.enemy.castle.health, 10);
    assert!(state.player.money + state.enemy.money > 0);
}
